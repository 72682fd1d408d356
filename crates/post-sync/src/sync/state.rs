//! Synchronizer state and the two halves of every operation.
//!
//! `prepare_*` runs before the external call, `confirm_*` applies its
//! outcome. Nothing touches the collection until a confirmation arrives.

use crate::domain::{NewRecord, Record, RecordId};
use crate::error::{SyncError, SyncResult};
use crate::source::IdAssignment;

use super::edit_slot::{Draft, EditSlot};
use super::mutation;
use super::notice::{self, Notice, NoticeLevel};

/// Buffers for the not-yet-submitted record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub body: String,
}

impl CreateForm {
    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }

    /// Whether the buffers still hold exactly what was submitted
    fn holds(&self, submitted: &NewRecord) -> bool {
        self.title == submitted.title && self.body == submitted.body
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// Sticks until the next load
    Failed(SyncError),
}

/// An update that has been sent but not yet confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub id: RecordId,
    pub title: String,
    pub body: String,
}

impl From<&Draft> for PendingEdit {
    fn from(draft: &Draft) -> Self {
        Self {
            id: draft.id.clone(),
            title: draft.title.clone(),
            body: draft.body.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncState {
    collection: Vec<Record>,
    edit_slot: EditSlot,
    create_form: CreateForm,
    load: LoadStatus,
    notices: Vec<Notice>,
    next_notice: u64,
    in_flight: usize,
    /// Create payloads sent but not yet confirmed; their local ids are reserved
    pending_creates: Vec<NewRecord>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Read access
    // ========================

    pub fn collection(&self) -> &[Record] {
        &self.collection
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        mutation::find(&self.collection, id)
    }

    pub fn edit_slot(&self) -> &EditSlot {
        &self.edit_slot
    }

    pub fn create_form(&self) -> &CreateForm {
        &self.create_form
    }

    pub fn create_form_mut(&mut self) -> &mut CreateForm {
        &mut self.create_form
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadStatus::Loading
    }

    pub fn load_error(&self) -> Option<&SyncError> {
        match &self.load {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Number of mutations sent but not yet confirmed or failed
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn dismiss_notice(&mut self, seq: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.seq != seq);
        self.notices.len() != before
    }

    /// Whether a create is awaiting its confirmation
    pub fn is_creating(&self) -> bool {
        !self.pending_creates.is_empty()
    }

    fn notify(&mut self, level: NoticeLevel, title: &str, text: impl Into<String>) {
        self.next_notice += 1;
        self.notices.push(Notice {
            seq: self.next_notice,
            level,
            title: title.to_string(),
            text: text.into(),
        });
    }

    fn notify_failure(&mut self, err: &SyncError) {
        self.notify(NoticeLevel::Error, notice::FAILED_TITLE, err.to_string());
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    // ========================
    // Load
    // ========================

    pub fn begin_load(&mut self) {
        self.load = LoadStatus::Loading;
    }

    /// Replace the collection with the source's list, or empty it on failure
    pub fn confirm_load(&mut self, outcome: SyncResult<Vec<Record>>) -> SyncResult<usize> {
        match outcome {
            Ok(records) => {
                let count = records.len();
                log::info!("loaded {} records", count);
                self.collection = records;
                self.load = LoadStatus::Ready;
                Ok(count)
            }
            Err(err) => {
                log::warn!("load failed: {}", err);
                self.collection.clear();
                self.load = LoadStatus::Failed(err.clone());
                Err(err)
            }
        }
    }

    // ========================
    // Create
    // ========================

    /// Validate the fields and build the create payload
    pub fn prepare_create(
        &mut self,
        title: &str,
        body: &str,
        ids: IdAssignment,
    ) -> SyncResult<NewRecord> {
        if title.trim().is_empty() || body.trim().is_empty() {
            let (heading, text) = notice::REQUIRED;
            self.notify(NoticeLevel::Error, heading, text);
            return Err(SyncError::Validation(text.to_string()));
        }

        let id = match ids {
            IdAssignment::Remote => None,
            IdAssignment::Local { offset } => Some(self.next_local_id(offset)),
        };
        let new_record = NewRecord {
            id,
            title: title.to_string(),
            body: body.to_string(),
        };
        self.in_flight += 1;
        self.pending_creates.push(new_record.clone());
        Ok(new_record)
    }

    /// `length + offset`, bumped past ids that are taken or reserved by a pending create
    fn next_local_id(&self, offset: i64) -> RecordId {
        let mut candidate = self.collection.len() as i64 + offset;
        while self.is_id_taken(&RecordId::Int(candidate)) {
            candidate += 1;
        }
        RecordId::Int(candidate)
    }

    fn is_id_taken(&self, id: &RecordId) -> bool {
        mutation::contains(&self.collection, id)
            || self
                .pending_creates
                .iter()
                .any(|pending| pending.id.as_ref() == Some(id))
    }

    /// Apply the outcome of creating `submitted`, the payload `prepare_create` returned
    ///
    /// The form is cleared only if it still holds the submitted fields.
    pub fn confirm_create(
        &mut self,
        submitted: &NewRecord,
        outcome: SyncResult<Record>,
    ) -> SyncResult<Record> {
        self.settle();
        if let Some(pos) = self.pending_creates.iter().position(|p| p == submitted) {
            self.pending_creates.remove(pos);
        }
        let record = match outcome {
            Ok(record) => record,
            Err(err) => {
                log::warn!("create failed: {}", err);
                self.notify_failure(&err);
                return Err(err);
            }
        };

        if let Err(rejected) = mutation::insert(&mut self.collection, record.clone()) {
            let err = SyncError::DuplicateId(rejected.id);
            log::warn!("create rejected: {}", err);
            self.notify_failure(&err);
            return Err(err);
        }

        log::info!("created record {}", record.id);
        if self.create_form.holds(submitted) {
            self.create_form.clear();
        }
        let (heading, text) = notice::CREATED;
        self.notify(NoticeLevel::Success, heading, text);
        Ok(record)
    }

    // ========================
    // Edit
    // ========================

    /// Stage the record for editing. Absent ids leave the slot untouched.
    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        let Some(record) = mutation::find(&self.collection, id) else {
            log::debug!("begin_edit: no record {}", id);
            return false;
        };
        if let Some(discarded) = self.edit_slot.begin(record) {
            log::debug!("discarded unsaved draft for {}", discarded.id);
        }
        true
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) -> bool {
        self.edit_slot.set_title(title)
    }

    pub fn set_draft_body(&mut self, body: impl Into<String>) -> bool {
        self.edit_slot.set_body(body)
    }

    pub fn prepare_save(&mut self) -> SyncResult<PendingEdit> {
        let draft = self.edit_slot.draft().ok_or(SyncError::NoActiveEdit)?;
        let pending = PendingEdit::from(draft);
        self.in_flight += 1;
        Ok(pending)
    }

    /// Merge the saved fields into the record; returns whether one matched
    pub fn confirm_save(&mut self, pending: PendingEdit, outcome: SyncResult<()>) -> SyncResult<bool> {
        self.settle();
        if let Err(err) = outcome {
            log::warn!("update of {} failed: {}", pending.id, err);
            self.notify_failure(&err);
            return Err(err);
        }

        let PendingEdit { id, title, body } = pending;
        let applied = mutation::update_by_id(&mut self.collection, &id, |record| {
            record.title = title;
            record.body = body;
        });
        if !applied {
            log::debug!("updated record {} is no longer present", id);
        }
        if self.edit_slot.is_editing(&id) {
            self.edit_slot.clear();
        }
        let (heading, text) = notice::UPDATED;
        self.notify(NoticeLevel::Success, heading, text);
        Ok(applied)
    }

    // ========================
    // Delete
    // ========================

    pub fn prepare_delete(&mut self, id: &RecordId) -> RecordId {
        self.in_flight += 1;
        id.clone()
    }

    /// Remove the record; returns whether one matched
    pub fn confirm_delete(&mut self, id: &RecordId, outcome: SyncResult<()>) -> SyncResult<bool> {
        self.settle();
        if let Err(err) = outcome {
            log::warn!("delete of {} failed: {}", id, err);
            self.notify_failure(&err);
            return Err(err);
        }

        let removed = mutation::remove_by_id(&mut self.collection, id).is_some();
        if removed {
            log::info!("deleted record {}", id);
        }
        if self.edit_slot.is_editing(id) {
            self.edit_slot.clear();
        }
        let (heading, text) = notice::DELETED;
        self.notify(NoticeLevel::Success, heading, text);
        Ok(removed)
    }
}
