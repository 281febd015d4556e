//! Runtime Configuration
//!
//! Endpoint location and log level.

use log::LevelFilter;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key for overriding the API base URL at runtime
pub const API_URL_STORAGE_KEY: &str = "workout_api_url";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Where the workout collection lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from local storage, then `WORKOUT_API_BASE` at build time,
    /// then the default.
    pub fn resolve() -> Self {
        Self::from_sources(stored_api_base(), option_env!("WORKOUT_API_BASE"))
    }

    fn from_sources(stored: Option<String>, compiled: Option<&str>) -> Self {
        let base = stored
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                compiled
                    .filter(|url| !url.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(&base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The collection endpoint: GET lists, POST creates
    pub fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(API_URL_STORAGE_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_api_base() -> Option<String> {
    None
}

/// Log level from `WORKOUT_LOG_LEVEL` at build time
pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("WORKOUT_LOG_LEVEL"))
}

fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
