//! Sync Layer
//!
//! The in-memory collection, its edit slot and create form, and the
//! operations that keep them in step with a `RecordSource`.

pub mod mutation;
mod edit_slot;
mod notice;
mod state;
mod synchronizer;

#[cfg(test)]
mod tests;

pub use edit_slot::{Draft, EditSlot};
pub use notice::{Notice, NoticeLevel};
pub use state::{CreateForm, LoadStatus, PendingEdit, SyncState};
pub use synchronizer::RecordSynchronizer;
