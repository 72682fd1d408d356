//! Post Manager Frontend App
//!
//! Loads the collection once on mount and renders form, list and notices.

use leptos::prelude::*;
use leptos::task::spawn_local;
use post_sync::LoadStatus;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NoticeStack, PostForm, PostList};
use crate::context::{build_config, AppContext};
use crate::store::{AppState, AppStateStoreFields};

/// What the main area shows
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Loading,
    Failed(String),
    Ready,
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), build_config());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load posts on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let config = ctx.config();
        log::info!("[APP] Loading posts from {} ({}), trigger={}", config.api_url, config.mode.as_str(), trigger);
        spawn_local(commands::load_posts(store, ctx.source()));
    });

    let phase = Memo::new(move |_| match store.sync().read().load_status() {
        LoadStatus::Idle | LoadStatus::Loading => Phase::Loading,
        LoadStatus::Failed(err) => Phase::Failed(err.to_string()),
        LoadStatus::Ready => Phase::Ready,
    });
    let post_count = Memo::new(move |_| store.sync().read().collection().len());
    let busy = Memo::new(move |_| store.sync().read().in_flight() > 0);

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Post Manager"</h1>

            <NoticeStack />

            {move || match phase.get() {
                Phase::Loading => view! {
                    <div class="status">"Loading posts..."</div>
                }.into_any(),
                Phase::Failed(detail) => view! {
                    <div class="status error">
                        <p>"Error fetching posts."</p>
                        <p class="error-detail">{detail}</p>
                        <button class="reload-btn" on:click=move |_| ctx.reload()>"Reload"</button>
                    </div>
                }.into_any(),
                Phase::Ready => view! {
                    <PostForm />
                    <PostList />
                }.into_any(),
            }}

            <p class="post-count">
                {move || format!("{} posts", post_count.get())}
                <Show when=move || busy.get()>
                    <span class="busy">" · saving..."</span>
                </Show>
            </p>
        </div>
    }
}
