//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use post_sync::SyncState;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Collection, edit slot, create form, load status and notices
    pub sync: SyncState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the create form's title buffer
pub fn store_set_form_title(store: &AppStore, title: String) {
    store.sync().write().create_form_mut().title = title;
}

/// Replace the create form's body buffer
pub fn store_set_form_body(store: &AppStore, body: String) {
    store.sync().write().create_form_mut().body = body;
}

/// Update the draft title of the record in edit mode
pub fn store_set_draft_title(store: &AppStore, title: String) {
    store.sync().write().set_draft_title(title);
}

/// Update the draft body of the record in edit mode
pub fn store_set_draft_body(store: &AppStore, body: String) {
    store.sync().write().set_draft_body(body);
}

/// Remove a notice by sequence number
pub fn store_dismiss_notice(store: &AppStore, seq: u64) {
    store.sync().write().dismiss_notice(seq);
}
