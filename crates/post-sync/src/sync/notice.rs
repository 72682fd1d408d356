//! User-facing notifications raised by the synchronizer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Increasing per state; used to dismiss
    pub seq: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

pub(crate) const CREATED: (&str, &str) = ("Post Created!", "Your new post has been added.");
pub(crate) const UPDATED: (&str, &str) = ("Updated!", "Your post has been updated successfully.");
pub(crate) const DELETED: (&str, &str) = ("Deleted!", "Your post has been deleted.");
pub(crate) const REQUIRED: (&str, &str) = ("Oops...", "Title and Description are required!");
pub(crate) const FAILED_TITLE: &str = "Request failed";
