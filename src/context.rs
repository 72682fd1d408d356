//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use post_sync::{AnySource, SyncConfig};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload posts from the source - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload posts from the source - write
    set_reload_trigger: WriteSignal<u32>,
    /// Source settings resolved at startup
    config: StoredValue<SyncConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: SyncConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of posts
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> SyncConfig {
        self.config.get_value()
    }

    /// Source for the next operation
    pub fn source(&self) -> AnySource {
        self.config.with_value(AnySource::from_config)
    }
}

/// Resolve `POST_MANAGER_*` keys captured at build time
pub fn build_config() -> SyncConfig {
    let lookup = |key: &str| {
        let value = match key {
            "POST_MANAGER_MODE" => option_env!("POST_MANAGER_MODE"),
            "POST_MANAGER_API_URL" => option_env!("POST_MANAGER_API_URL"),
            "POST_MANAGER_LIST_KEY" => option_env!("POST_MANAGER_LIST_KEY"),
            "POST_MANAGER_LATENCY_MS" => option_env!("POST_MANAGER_LATENCY_MS"),
            "POST_MANAGER_ID_OFFSET" => option_env!("POST_MANAGER_ID_OFFSET"),
            "POST_MANAGER_USER_ID" => option_env!("POST_MANAGER_USER_ID"),
            _ => None,
        };
        value.map(str::to_string)
    };

    SyncConfig::from_lookup(lookup).unwrap_or_else(|err| {
        log::warn!("[APP] {}; falling back to defaults", err);
        SyncConfig::default()
    })
}
