//! Notice Stack Component
//!
//! Toasts for the synchronizer's success and failure notices.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use post_sync::Notice;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

/// How long a toast stays up unless dismissed
const NOTICE_TTL_MS: u32 = 3_000;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let store = use_app_store();
    let notices = Memo::new(move |_| store.sync().read().notices().to_vec());

    view! {
        <div class="notice-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.seq
                children=move |notice: Notice| view! { <NoticeToast notice=notice /> }
            />
        </div>
    }
}

#[component]
fn NoticeToast(notice: Notice) -> impl IntoView {
    let store = use_app_store();
    let seq = notice.seq;

    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        store_dismiss_notice(&store, seq);
    });

    let class = if notice.is_error() { "notice error" } else { "notice success" };

    view! {
        <div class=class role="status">
            <strong class="notice-title">{notice.title}</strong>
            <span class="notice-text">{notice.text}</span>
            <button class="dismiss-btn" on:click=move |_| store_dismiss_notice(&store, seq)>"×"</button>
        </div>
    }
}
