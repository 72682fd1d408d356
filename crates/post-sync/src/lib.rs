//! Post Sync
//!
//! Keeps a local, ordered collection of posts consistent with the outcome of
//! create/update/delete calls against a remote or simulated backend.
//!
//! Layered architecture:
//! - domain: records and their identity
//! - source: where records are read and written
//! - sync: local state and the operations applied on confirmation

pub mod config;
pub mod domain;
pub mod error;
pub mod source;
pub mod sync;

pub use config::{SourceMode, SyncConfig};
pub use domain::{Entity, NewRecord, Record, RecordId};
pub use error::{SyncError, SyncResult};
pub use source::{AnySource, HttpSource, IdAssignment, RecordSource, SimulatedSource};
pub use sync::{
    CreateForm, Draft, EditSlot, LoadStatus, Notice, NoticeLevel, PendingEdit, RecordSynchronizer,
    SyncState,
};
