//! Post Form Component
//!
//! Title and description inputs for the next post.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_set_form_body, store_set_form_title, use_app_store, AppStateStoreFields};

/// Form for creating new posts
#[component]
pub fn PostForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let title = Memo::new(move |_| store.sync().read().create_form().title.clone());
    let body = Memo::new(move |_| store.sync().read().create_form().body.clone());
    let creating = Memo::new(move |_| store.sync().read().is_creating());

    // Validation happens in the synchronizer so empty fields still raise a notice
    let create_post = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(commands::create_post(store, ctx.source()));
    };

    view! {
        <form class="post-form" on:submit=create_post>
            <input
                type="text"
                placeholder="Enter Title"
                prop:value=move || title.get()
                on:input=move |ev| store_set_form_title(&store, event_target_value(&ev))
            />
            <textarea
                placeholder="Enter Description"
                rows="3"
                prop:value=move || body.get()
                on:input=move |ev| store_set_form_body(&store, event_target_value(&ev))
            />
            <button type="submit" class="create-btn" prop:disabled=move || creating.get()>
                {move || if creating.get() { "Creating..." } else { "Create Post" }}
            </button>
        </form>
    }
}
