//! Source Layer - Core Traits
//!
//! Defines the abstract interface to wherever records live.
//! Implementations can talk HTTP, simulate writes, keep things in memory, etc.

use async_trait::async_trait;

use crate::domain::{NewRecord, Record, RecordId};
use crate::error::SyncResult;

/// Who picks the id of a newly created record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdAssignment {
    /// The source assigns it and returns it with the confirmation
    Remote,
    /// The client synthesizes `collection length + offset`
    Local { offset: i64 },
}

/// Core source trait for CRUD operations on records
///
/// All operations are async; futures are not required to be `Send` so the
/// same implementations run on a browser event loop.
#[async_trait(?Send)]
pub trait RecordSource {
    /// How ids for new records are chosen
    fn id_assignment(&self) -> IdAssignment;

    /// Read the whole collection, in source order
    async fn fetch_all(&self) -> SyncResult<Vec<Record>>;

    /// Create a record, returning it with its confirmed id
    async fn create(&self, record: &NewRecord) -> SyncResult<Record>;

    /// Replace title and body of one record
    async fn update(&self, id: &RecordId, title: &str, body: &str) -> SyncResult<()>;

    /// Delete one record
    async fn delete(&self, id: &RecordId) -> SyncResult<()>;
}
