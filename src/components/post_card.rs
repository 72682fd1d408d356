//! Post Card Component
//!
//! One post, switching between display and edit mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use post_sync::RecordId;

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_set_draft_body, store_set_draft_title, use_app_store, AppStateStoreFields};

/// A single post card; reads its record from the store by id
#[component]
pub fn PostCard(id: RecordId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let record = {
        let id = id.clone();
        Memo::new(move |_| store.sync().read().find(&id).cloned())
    };
    let is_editing = {
        let id = id.clone();
        Memo::new(move |_| store.sync().read().edit_slot().is_editing(&id))
    };
    let draft = Memo::new(move |_| {
        store
            .sync()
            .read()
            .edit_slot()
            .draft()
            .map(|d| (d.title.clone(), d.body.clone()))
            .unwrap_or_default()
    });

    let title = move || record.get().map(|r| r.title).unwrap_or_default();
    let body = move || record.get().map(|r| r.body).unwrap_or_default();

    let begin_edit = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            store.sync().write().begin_edit(&id);
        }
    };
    let save_edit = move |_: web_sys::MouseEvent| spawn_local(commands::save_edit(store, ctx.source()));
    let delete_post = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| spawn_local(commands::delete_post(store, ctx.source(), id.clone()))
    };

    view! {
        <div class="post-card">
            <div class="post-id">{format!("Post #{}", id)}</div>

            <Show
                when=move || is_editing.get()
                fallback=move || view! {
                    <h3 class="post-title">"Title: " {title}</h3>
                    <p class="post-body">{body}</p>
                }
            >
                <input
                    type="text"
                    prop:value=move || draft.get().0
                    on:input=move |ev| store_set_draft_title(&store, event_target_value(&ev))
                />
                <textarea
                    rows="3"
                    prop:value=move || draft.get().1
                    on:input=move |ev| store_set_draft_body(&store, event_target_value(&ev))
                />
            </Show>

            <div class="post-actions">
                <Show
                    when=move || is_editing.get()
                    fallback={
                        let begin_edit = begin_edit.clone();
                        move || view! { <button class="edit-btn" on:click=begin_edit.clone()>"Edit"</button> }
                    }
                >
                    <button class="save-btn" on:click=save_edit>"Save"</button>
                </Show>
                <button class="delete-btn" on:click=delete_post>"Delete"</button>
            </div>
        </div>
    }
}
