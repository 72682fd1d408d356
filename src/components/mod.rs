//! UI Components
//!
//! Reusable Leptos components.

mod notice_stack;
mod post_card;
mod post_form;
mod post_list;

pub use notice_stack::NoticeStack;
pub use post_card::PostCard;
pub use post_form::PostForm;
pub use post_list::PostList;
