//! Configuration for the record source.
//!
//! Defaults describe the public demo APIs; every value can be overridden
//! through `POST_MANAGER_*` keys.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

pub const REMOTE_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const SIMULATED_API_URL: &str = "https://dummyjson.com/posts";
pub const DEFAULT_LATENCY_MS: u64 = 500;
pub const DEFAULT_ID_OFFSET: i64 = 101;

/// Which backend the synchronizer talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Writes go to the API, which assigns ids
    Remote,
    /// Reads go to the API, writes resolve locally after a delay
    Simulated,
}

impl SourceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceMode::Remote => "remote",
            SourceMode::Simulated => "simulated",
        }
    }
}

impl FromStr for SourceMode {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(SourceMode::Remote),
            "simulated" | "local" => Ok(SourceMode::Simulated),
            other => Err(SyncError::Config(format!("unknown mode '{}'", other))),
        }
    }
}

/// Where records come from and how writes are confirmed.
///
/// The default is `remote()`. JSONPlaceholder answers every POST with id 101,
/// so in that mode only the first create of a session is accepted; later
/// creates come back as `DuplicateId` and leave the collection unchanged.
/// Use `simulated()` for repeated creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    pub mode: SourceMode,
    /// Collection endpoint; single records live at `{api_url}/{id}`
    pub api_url: String,
    /// Key holding the list when the endpoint wraps it in an object
    pub list_key: Option<String>,
    /// Simulated write latency
    pub latency_ms: u64,
    /// Local ids are `collection length + id_offset`
    pub id_offset: i64,
    /// Owner attached to remote creates
    pub user_id: Option<i64>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::remote()
    }
}

impl SyncConfig {
    pub fn remote() -> Self {
        Self {
            mode: SourceMode::Remote,
            api_url: REMOTE_API_URL.to_string(),
            list_key: None,
            latency_ms: DEFAULT_LATENCY_MS,
            id_offset: DEFAULT_ID_OFFSET,
            user_id: Some(1),
        }
    }

    pub fn simulated() -> Self {
        Self {
            mode: SourceMode::Simulated,
            api_url: SIMULATED_API_URL.to_string(),
            list_key: Some("posts".to_string()),
            latency_ms: DEFAULT_LATENCY_MS,
            id_offset: DEFAULT_ID_OFFSET,
            user_id: None,
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Build a config from a key lookup.
    ///
    /// `POST_MANAGER_MODE` picks the preset first, the remaining keys
    /// override individual fields.
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = match get("POST_MANAGER_MODE") {
            Some(mode) => match mode.parse::<SourceMode>()? {
                SourceMode::Remote => Self::remote(),
                SourceMode::Simulated => Self::simulated(),
            },
            None => Self::default(),
        };

        if let Some(url) = get("POST_MANAGER_API_URL") {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(key) = get("POST_MANAGER_LIST_KEY") {
            config.list_key = Some(key.trim().to_string());
        }
        if let Some(ms) = get("POST_MANAGER_LATENCY_MS") {
            config.latency_ms = parse_number("POST_MANAGER_LATENCY_MS", &ms)?;
        }
        if let Some(offset) = get("POST_MANAGER_ID_OFFSET") {
            config.id_offset = parse_number("POST_MANAGER_ID_OFFSET", &offset)?;
        }
        if let Some(user) = get("POST_MANAGER_USER_ID") {
            config.user_id = Some(parse_number("POST_MANAGER_USER_ID", &user)?);
        }

        Ok(config)
    }

    /// Load configuration from a `.env` file and the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> SyncResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> SyncResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| SyncError::Config(format!("{} must be a number, got '{}'", key, raw)))
}
