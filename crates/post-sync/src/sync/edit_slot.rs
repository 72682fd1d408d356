//! Single-record edit state.

use crate::domain::{Record, RecordId};

/// Staged fields for the record being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub id: RecordId,
    pub title: String,
    pub body: String,
}

/// At most one record is in edit mode at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSlot {
    #[default]
    Empty,
    Editing(Draft),
}

impl EditSlot {
    /// Stage `record` for editing, replacing whatever was staged before
    pub fn begin(&mut self, record: &Record) -> Option<Draft> {
        let previous = std::mem::replace(
            self,
            EditSlot::Editing(Draft {
                id: record.id.clone(),
                title: record.title.clone(),
                body: record.body.clone(),
            }),
        );
        match previous {
            EditSlot::Editing(draft) => Some(draft),
            EditSlot::Empty => None,
        }
    }

    pub fn clear(&mut self) {
        *self = EditSlot::Empty;
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditSlot::Editing(draft) => Some(draft),
            EditSlot::Empty => None,
        }
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        self.draft().map(|draft| &draft.id)
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.editing_id() == Some(id)
    }

    /// Returns false when nothing is being edited
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        match self {
            EditSlot::Editing(draft) => {
                draft.title = title.into();
                true
            }
            EditSlot::Empty => false,
        }
    }

    /// Returns false when nothing is being edited
    pub fn set_body(&mut self, body: impl Into<String>) -> bool {
        match self {
            EditSlot::Editing(draft) => {
                draft.body = body.into();
                true
            }
            EditSlot::Empty => false,
        }
    }
}
