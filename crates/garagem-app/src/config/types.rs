//! Configuration types for Garagem

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote registry settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL; requests go to `{base_url}/veiculos`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiSettings {
    /// Request timeout, never below 100ms
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(100))
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting from the vehicle list
    #[serde(default)]
    pub confirm_quit: bool,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll / spinner tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_tick_rate_ms() -> u64 {
    50
}
