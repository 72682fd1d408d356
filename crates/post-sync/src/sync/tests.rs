//! Synchronizer Scenario Tests
//!
//! Runs every operation against an in-memory source with injectable failures.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use crate::domain::{NewRecord, Record, RecordId};
    use crate::error::{SyncError, SyncResult};
    use crate::source::{IdAssignment, RecordSource};
    use crate::sync::{CreateForm, EditSlot, LoadStatus, NoticeLevel, RecordSynchronizer};

    /// In-memory source; ids are remote-assigned unless `local_offset` is set
    struct MemorySource {
        records: RefCell<Vec<Record>>,
        next_id: Cell<i64>,
        local_offset: Option<i64>,
        fail_next: Cell<bool>,
        calls: Cell<usize>,
    }

    impl MemorySource {
        fn remote(records: Vec<Record>) -> Self {
            Self {
                records: RefCell::new(records),
                next_id: Cell::new(1000),
                local_offset: None,
                fail_next: Cell::new(false),
                calls: Cell::new(0),
            }
        }

        fn local(offset: i64) -> Self {
            Self {
                local_offset: Some(offset),
                ..Self::remote(Vec::new())
            }
        }

        fn fail_next(&self) {
            self.fail_next.set(true);
        }

        fn call(&self) -> SyncResult<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_next.replace(false) {
                Err(SyncError::Status {
                    status: 500,
                    url: "memory://posts".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl RecordSource for MemorySource {
        fn id_assignment(&self) -> IdAssignment {
            match self.local_offset {
                Some(offset) => IdAssignment::Local { offset },
                None => IdAssignment::Remote,
            }
        }

        async fn fetch_all(&self) -> SyncResult<Vec<Record>> {
            self.call()?;
            Ok(self.records.borrow().clone())
        }

        async fn create(&self, record: &NewRecord) -> SyncResult<Record> {
            self.call()?;
            let id = match &record.id {
                Some(id) => id.clone(),
                None => {
                    let id = self.next_id.get();
                    self.next_id.set(id + 1);
                    RecordId::Int(id)
                }
            };
            let created = Record::new(id, record.title.clone(), record.body.clone());
            self.records.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: &RecordId, title: &str, body: &str) -> SyncResult<()> {
            self.call()?;
            if let Some(r) = self.records.borrow_mut().iter_mut().find(|r| &r.id == id) {
                r.title = title.to_string();
                r.body = body.to_string();
            }
            Ok(())
        }

        async fn delete(&self, id: &RecordId) -> SyncResult<()> {
            self.call()?;
            self.records.borrow_mut().retain(|r| &r.id != id);
            Ok(())
        }
    }

    fn seeded() -> Vec<Record> {
        let mut first = Record::new(1, "His mother had always taught him", "first body");
        first.extra.insert("userId".to_string(), serde_json::json!(9));
        vec![
            first,
            Record::new(2, "He was an expert but not in a discipline", "second body"),
            Record::new(3, "Dave watched as the forest burned up", "third body"),
        ]
    }

    async fn loaded() -> RecordSynchronizer<MemorySource> {
        let mut sync = RecordSynchronizer::new(MemorySource::remote(seeded()));
        sync.load().await.expect("load failed");
        sync
    }

    #[tokio::test]
    async fn test_load_replaces_collection_in_source_order() {
        let mut sync = RecordSynchronizer::new(MemorySource::remote(seeded()));
        assert_eq!(sync.state().load_status(), &LoadStatus::Idle);

        let count = sync.load().await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(sync.state().collection(), seeded().as_slice());
        assert_eq!(sync.state().load_status(), &LoadStatus::Ready);
        assert!(!sync.state().is_loading());
    }

    #[tokio::test]
    async fn test_load_twice_is_stable() {
        let mut sync = loaded().await;
        let first = sync.state().collection().to_vec();

        sync.load().await.unwrap();

        assert_eq!(sync.state().collection(), first.as_slice());
    }

    #[tokio::test]
    async fn test_failed_load_empties_collection_and_sets_error() {
        let mut sync = loaded().await;
        sync.source().fail_next();

        let err = sync.load().await.unwrap_err();

        assert!(sync.state().collection().is_empty());
        assert_eq!(sync.state().load_error(), Some(&err));
        assert!(sync.state().notices().is_empty());
    }

    #[tokio::test]
    async fn test_create_appends_confirmed_record() {
        let mut sync = loaded().await;
        sync.state_mut().create_form_mut().title = "New".to_string();
        sync.state_mut().create_form_mut().body = "Post".to_string();

        let created = sync.create("New", "Post").await.unwrap();

        let collection = sync.state().collection();
        assert_eq!(collection.len(), 4);
        assert_eq!(collection.last(), Some(&created));
        assert_eq!(created.id, RecordId::Int(1000));
        assert_eq!((created.title.as_str(), created.body.as_str()), ("New", "Post"));
        assert_eq!(sync.state().create_form(), &CreateForm::default());
        assert_eq!(sync.state().in_flight(), 0);

        let notice = sync.state().notices().last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.title, "Post Created!");
    }

    #[tokio::test]
    async fn test_create_requires_title_and_body() {
        let mut sync = loaded().await;
        sync.state_mut().create_form_mut().body = "x".to_string();
        let form_before = sync.state().create_form().clone();
        let calls_before = sync.source().calls.get();

        for (title, body) in [("", "x"), ("x", ""), ("   ", "x")] {
            let err = sync.create(title, body).await.unwrap_err();
            assert!(matches!(err, SyncError::Validation(_)));
        }

        assert_eq!(sync.state().collection(), seeded().as_slice());
        assert_eq!(sync.state().create_form(), &form_before);
        assert_eq!(sync.source().calls.get(), calls_before);
        assert_eq!(sync.state().in_flight(), 0);
        let notices = sync.state().notices();
        assert_eq!(notices.len(), 3);
        assert!(notices.iter().all(|n| n.is_error() && n.text == "Title and Description are required!"));
    }

    #[tokio::test]
    async fn test_failed_create_keeps_collection_and_form() {
        let mut sync = loaded().await;
        sync.state_mut().create_form_mut().title = "Keep".to_string();
        sync.state_mut().create_form_mut().body = "me".to_string();
        sync.source().fail_next();

        let err = sync.create("Keep", "me").await.unwrap_err();

        assert!(matches!(err, SyncError::Status { status: 500, .. }));
        assert_eq!(sync.state().collection().len(), 3);
        assert_eq!(sync.state().create_form().title, "Keep");
        assert_eq!(sync.state().in_flight(), 0);
        assert_eq!(sync.state().notices().last().unwrap().title, "Request failed");
    }

    #[tokio::test]
    async fn test_duplicate_confirmed_id_is_rejected() {
        let mut sync = loaded().await;
        sync.source().next_id.set(2);

        let err = sync.create("Clash", "body").await.unwrap_err();

        assert_eq!(err, SyncError::DuplicateId(RecordId::Int(2)));
        assert_eq!(sync.state().collection(), seeded().as_slice());
    }

    #[tokio::test]
    async fn test_local_ids_use_length_plus_offset() {
        let mut sync = RecordSynchronizer::new(MemorySource::local(101));
        sync.load().await.unwrap();

        let a = sync.create("A", "1").await.unwrap();
        let b = sync.create("B", "2").await.unwrap();

        assert_eq!(a.id, RecordId::Int(101));
        assert_eq!(b.id, RecordId::Int(102));
    }

    #[tokio::test]
    async fn test_local_id_skips_ids_still_in_use() {
        let mut sync = RecordSynchronizer::new(MemorySource::local(101));
        sync.load().await.unwrap();
        sync.create("A", "1").await.unwrap();
        sync.create("B", "2").await.unwrap();
        sync.delete(&RecordId::Int(101)).await.unwrap();

        // length 1 + 101 = 102 is still taken by "B"
        let c = sync.create("C", "3").await.unwrap();

        assert_eq!(c.id, RecordId::Int(103));
        let ids: Vec<_> = sync.state().collection().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![RecordId::Int(102), RecordId::Int(103)]);
    }

    #[tokio::test]
    async fn test_overlapping_creates_get_distinct_ids_and_keep_newer_input() {
        let mut sync = RecordSynchronizer::new(MemorySource::local(101));
        sync.load().await.unwrap();
        let ids = sync.source().id_assignment();

        sync.state_mut().create_form_mut().title = "A".to_string();
        sync.state_mut().create_form_mut().body = "1".to_string();
        let a = sync.state_mut().prepare_create("A", "1", ids).unwrap();

        *sync.state_mut().create_form_mut() = CreateForm {
            title: "B".to_string(),
            body: "2".to_string(),
        };
        let b = sync.state_mut().prepare_create("B", "2", ids).unwrap();
        assert_ne!(a.id, b.id);
        assert!(sync.state().is_creating());

        let outcome = sync.source().create(&a).await;
        sync.state_mut().confirm_create(&a, outcome).unwrap();
        assert_eq!(sync.state().create_form().title, "B");
        assert_eq!(sync.state().create_form().body, "2");

        let outcome = sync.source().create(&b).await;
        sync.state_mut().confirm_create(&b, outcome).unwrap();

        let ids: Vec<_> = sync.state().collection().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![RecordId::Int(101), RecordId::Int(102)]);
        assert_eq!(sync.state().create_form(), &CreateForm::default());
        assert!(!sync.state().is_creating());
        assert_eq!(sync.state().in_flight(), 0);
    }

    #[tokio::test]
    async fn test_failed_create_releases_its_reserved_id() {
        let mut sync = RecordSynchronizer::new(MemorySource::local(101));
        sync.load().await.unwrap();
        sync.source().fail_next();

        assert!(sync.create("A", "1").await.is_err());
        assert!(!sync.state().is_creating());

        let b = sync.create("B", "2").await.unwrap();
        assert_eq!(b.id, RecordId::Int(101));
    }

    #[tokio::test]
    async fn test_edit_round_trip_scenario() {
        let mut sync = RecordSynchronizer::new(MemorySource::local(101));
        sync.load().await.unwrap();
        assert!(sync.state().collection().is_empty());

        sync.create("A", "B").await.unwrap();
        assert_eq!(sync.state().collection(), &[Record::new(101, "A", "B")]);

        assert!(sync.begin_edit(&RecordId::Int(101)));
        let draft = sync.state().edit_slot().draft().unwrap().clone();
        assert_eq!(draft.id, RecordId::Int(101));
        assert_eq!((draft.title.as_str(), draft.body.as_str()), ("A", "B"));

        sync.state_mut().set_draft_title("A2");
        assert!(sync.save_edit().await.unwrap());

        assert_eq!(sync.state().collection(), &[Record::new(101, "A2", "B")]);
        assert_eq!(sync.state().edit_slot(), &EditSlot::Empty);
    }

    #[tokio::test]
    async fn test_save_touches_only_the_edited_record() {
        let mut sync = loaded().await;
        sync.begin_edit(&RecordId::Int(1));
        sync.state_mut().set_draft_title("Retitled");
        sync.state_mut().set_draft_body("Rewritten");

        sync.save_edit().await.unwrap();

        let before = seeded();
        let after = sync.state().collection();
        assert_eq!(after[0].title, "Retitled");
        assert_eq!(after[0].body, "Rewritten");
        assert_eq!(after[0].extra, before[0].extra);
        assert_eq!(&after[1..], &before[1..]);
        assert_eq!(sync.source().records.borrow()[0].title, "Retitled");
    }

    #[tokio::test]
    async fn test_failed_save_stays_in_edit_mode() {
        let mut sync = loaded().await;
        sync.begin_edit(&RecordId::Int(2));
        sync.state_mut().set_draft_body("unsent");
        sync.source().fail_next();

        assert!(sync.save_edit().await.is_err());

        assert!(sync.state().edit_slot().is_editing(&RecordId::Int(2)));
        assert_eq!(sync.state().edit_slot().draft().unwrap().body, "unsent");
        assert_eq!(sync.state().collection(), seeded().as_slice());
    }

    #[tokio::test]
    async fn test_save_without_edit_fails_before_any_call() {
        let mut sync = loaded().await;
        let calls = sync.source().calls.get();

        assert_eq!(sync.save_edit().await, Err(SyncError::NoActiveEdit));
        assert_eq!(sync.source().calls.get(), calls);
    }

    #[tokio::test]
    async fn test_begin_edit_switch_discards_draft() {
        let mut sync = loaded().await;
        sync.begin_edit(&RecordId::Int(1));
        sync.state_mut().set_draft_title("lost");

        assert!(sync.begin_edit(&RecordId::Int(3)));
        sync.save_edit().await.unwrap();

        assert_eq!(sync.state().collection()[0], seeded()[0]);
        assert_eq!(sync.state().collection()[2], seeded()[2]);
    }

    #[tokio::test]
    async fn test_begin_edit_unknown_id_is_noop() {
        let mut sync = loaded().await;
        sync.begin_edit(&RecordId::Int(2));

        assert!(!sync.begin_edit(&RecordId::Int(42)));
        assert!(sync.state().edit_slot().is_editing(&RecordId::Int(2)));
    }

    #[tokio::test]
    async fn test_save_after_local_removal_reports_success_without_change() {
        let mut sync = loaded().await;
        sync.begin_edit(&RecordId::Int(2));
        let pending = sync.state_mut().prepare_save().unwrap();
        sync.state_mut().confirm_delete(&RecordId::Int(2), Ok(())).unwrap();

        let applied = sync.state_mut().confirm_save(pending, Ok(())).unwrap();

        assert!(!applied);
        assert_eq!(sync.state().collection().len(), 2);
        assert_eq!(sync.state().edit_slot(), &EditSlot::Empty);
    }

    #[tokio::test]
    async fn test_confirm_save_keeps_a_retargeted_slot() {
        let mut sync = loaded().await;
        sync.begin_edit(&RecordId::Int(1));
        let pending = sync.state_mut().prepare_save().unwrap();
        sync.begin_edit(&RecordId::Int(3));

        sync.state_mut().confirm_save(pending, Ok(())).unwrap();

        assert!(sync.state().edit_slot().is_editing(&RecordId::Int(3)));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let mut sync = loaded().await;

        assert!(sync.delete(&RecordId::Int(2)).await.unwrap());

        let collection = sync.state().collection();
        assert_eq!(collection.len(), 2);
        assert!(collection.iter().all(|r| r.id != RecordId::Int(2)));
        assert_eq!(sync.state().notices().last().unwrap().title, "Deleted!");
    }

    #[tokio::test]
    async fn test_deleting_the_edited_record_ends_edit_mode() {
        let mut sync = loaded().await;
        sync.begin_edit(&RecordId::Int(2));

        sync.delete(&RecordId::Int(2)).await.unwrap();

        assert_eq!(sync.state().edit_slot(), &EditSlot::Empty);
        assert_eq!(sync.save_edit().await, Err(SyncError::NoActiveEdit));
    }

    #[tokio::test]
    async fn test_deleting_another_record_keeps_edit_mode() {
        let mut sync = loaded().await;
        sync.begin_edit(&RecordId::Int(2));

        sync.delete(&RecordId::Int(3)).await.unwrap();

        assert!(sync.state().edit_slot().is_editing(&RecordId::Int(2)));
    }

    #[tokio::test]
    async fn test_delete_missing_id_keeps_length() {
        let mut sync = loaded().await;

        assert!(!sync.delete(&RecordId::Int(99)).await.unwrap());
        assert_eq!(sync.state().collection().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_record() {
        let mut sync = loaded().await;
        sync.source().fail_next();

        assert!(sync.delete(&RecordId::Int(1)).await.is_err());
        assert_eq!(sync.state().collection().len(), 3);
        assert!(sync.state().notices().last().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_in_flight_tracks_prepared_mutations() {
        let mut sync = loaded().await;
        let state = sync.state_mut();

        let id = state.prepare_delete(&RecordId::Int(1));
        state.begin_edit(&RecordId::Int(2));
        let pending = state.prepare_save().unwrap();
        assert_eq!(state.in_flight(), 2);

        state.confirm_delete(&id, Ok(())).unwrap();
        state.confirm_save(pending, Err(SyncError::Transport("offline".into()))).unwrap_err();
        assert_eq!(state.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_notices_can_be_dismissed() {
        let mut sync = loaded().await;
        sync.delete(&RecordId::Int(1)).await.unwrap();
        sync.delete(&RecordId::Int(2)).await.unwrap();

        let seqs: Vec<u64> = sync.state().notices().iter().map(|n| n.seq).collect();
        assert_eq!(seqs.len(), 2);
        assert!(seqs[0] < seqs[1]);

        assert!(sync.state_mut().dismiss_notice(seqs[0]));
        assert!(!sync.state_mut().dismiss_notice(seqs[0]));
        assert!(sync.state_mut().dismiss_notice(seqs[1]));
        assert!(sync.state().notices().is_empty());
    }
}
