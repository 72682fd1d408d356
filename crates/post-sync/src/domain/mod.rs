//! Domain Layer
//!
//! Records managed by the synchronizer and the identity contract they share.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod record;

pub use entity::Entity;
pub use record::{NewRecord, Record, RecordId};
