//! Synchronizer Commands
//!
//! Async actions behind UI events. Each one prepares against the store,
//! awaits the source, and confirms the outcome back into the store; no
//! store guard is held across the await.

use post_sync::{AnySource, RecordId, RecordSource};

use crate::store::{AppStateStoreFields, AppStore};
use leptos::prelude::*;

pub async fn load_posts(store: AppStore, source: AnySource) {
    store.sync().write().begin_load();
    let outcome = source.fetch_all().await;
    let _ = store.sync().write().confirm_load(outcome);
}

/// Submit the create form
pub async fn create_post(store: AppStore, source: AnySource) {
    let prepared = {
        let sync = store.sync();
        let mut state = sync.write();
        let form = state.create_form().clone();
        state.prepare_create(&form.title, &form.body, source.id_assignment())
    };
    let Ok(new_record) = prepared else {
        return;
    };

    let outcome = source.create(&new_record).await;
    let _ = store.sync().write().confirm_create(&new_record, outcome);
}

/// Send the draft of the record in edit mode
pub async fn save_edit(store: AppStore, source: AnySource) {
    let prepared = store.sync().write().prepare_save();
    let Ok(pending) = prepared else {
        return;
    };

    let outcome = source.update(&pending.id, &pending.title, &pending.body).await;
    let _ = store.sync().write().confirm_save(pending, outcome);
}

pub async fn delete_post(store: AppStore, source: AnySource, id: RecordId) {
    let id = store.sync().write().prepare_delete(&id);
    let outcome = source.delete(&id).await;
    let _ = store.sync().write().confirm_delete(&id, outcome);
}
