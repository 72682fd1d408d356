//! RecordSynchronizer
//!
//! Owns a source and a `SyncState` and runs each operation to completion:
//! prepare, await the source, confirm.

use crate::domain::{Record, RecordId};
use crate::error::SyncResult;
use crate::source::RecordSource;

use super::state::SyncState;

pub struct RecordSynchronizer<S> {
    source: S,
    state: SyncState,
}

impl<S: RecordSource> RecordSynchronizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: SyncState::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// Form buffers, drafts and notice dismissal go through here
    pub fn state_mut(&mut self) -> &mut SyncState {
        &mut self.state
    }

    /// Replace the collection with the source's current list
    pub async fn load(&mut self) -> SyncResult<usize> {
        self.state.begin_load();
        let outcome = self.source.fetch_all().await;
        self.state.confirm_load(outcome)
    }

    /// Create a record and append it once the source confirms
    pub async fn create(&mut self, title: &str, body: &str) -> SyncResult<Record> {
        let new_record = self
            .state
            .prepare_create(title, body, self.source.id_assignment())?;
        let outcome = self.source.create(&new_record).await;
        self.state.confirm_create(&new_record, outcome)
    }

    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        self.state.begin_edit(id)
    }

    /// Send the staged draft; `Ok(false)` means the record had vanished locally
    pub async fn save_edit(&mut self) -> SyncResult<bool> {
        let pending = self.state.prepare_save()?;
        let outcome = self
            .source
            .update(&pending.id, &pending.title, &pending.body)
            .await;
        self.state.confirm_save(pending, outcome)
    }

    /// Delete a record; `Ok(false)` means it was not in the collection
    pub async fn delete(&mut self, id: &RecordId) -> SyncResult<bool> {
        let id = self.state.prepare_delete(id);
        let outcome = self.source.delete(&id).await;
        self.state.confirm_delete(&id, outcome)
    }
}
