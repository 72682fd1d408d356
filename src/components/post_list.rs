//! Post List Component

use leptos::prelude::*;
use post_sync::RecordId;

use crate::components::PostCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// All posts in collection order, one card per id
#[component]
pub fn PostList() -> impl IntoView {
    let store = use_app_store();

    let ids = Memo::new(move |_| {
        store
            .sync()
            .read()
            .collection()
            .iter()
            .map(|record| record.id.clone())
            .collect::<Vec<RecordId>>()
    });

    view! {
        <div class="post-list">
            <h2>"All Posts"</h2>
            <For
                each=move || ids.get()
                key=|id| id.clone()
                children=move |id: RecordId| view! { <PostCard id=id /> }
            />
        </div>
    }
}
