//! Record Entity
//!
//! A post-like item as served by the remote source. Only `id`, `title` and
//! `body` are interpreted; every other field rides along untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::Entity;

/// Record identifier: an integer or a string, exactly as the source sent it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        RecordId::Int(id.into())
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

/// A managed post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Passthrough fields (`userId`, `tags`, `reactions`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            extra: Map::new(),
        }
    }
}

impl Entity for Record {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Create payload: a record without a confirmed id
///
/// `id` is set only when the source expects the client to pick one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub body: String,
}

impl NewRecord {
    /// Turn the payload into the record a simulated source would confirm
    pub fn into_record(self) -> Option<Record> {
        let NewRecord { id, title, body } = self;
        id.map(|id| Record::new(id, title, body))
    }
}
