//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first, so local setups
//! can pin the API address without exporting variables.

use todo_core::{TodoClient, DEFAULT_BASE_URL};

/// Base URL of the todo API.
pub const API_URL_ENV: &str = "TODO_API_URL";

/// `tracing` filter directives, e.g. `info,todo_core=debug`.
pub const LOG_ENV: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or blank
    /// variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            base_url: read(API_URL_ENV, DEFAULT_BASE_URL),
            log_filter: read(LOG_ENV, DEFAULT_LOG_FILTER),
        }
    }

    pub fn client(&self) -> TodoClient {
        TodoClient::new(&self.base_url)
    }
}
