//! Configuration types for the CRONOS console
//!
//! Defines:
//! - `Settings` - All settings loaded from `config.toml`
//! - `ServerSettings`, `UiSettings`, `DownloadSettings` - One per table

use std::time::Duration;

use cronos_client::{ApiBase, DEFAULT_BASE_URL};
use cronos_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Global application settings from `.cronos/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub downloads: DownloadSettings,
}

impl Settings {
    /// Parsed service base URL
    pub fn api_base(&self) -> Result<ApiBase> {
        ApiBase::parse(&self.server.base_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_secs.max(1))
    }
}

/// Analysis service connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL; `/analyze` and `/report/...` are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Text area sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Minimum visible rows of every text area
    #[serde(default = "default_editor_min_rows")]
    pub editor_min_rows: u16,

    /// Maximum visible rows before the text area scrolls
    #[serde(default = "default_editor_max_rows")]
    pub editor_max_rows: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            editor_min_rows: default_editor_min_rows(),
            editor_max_rows: default_editor_max_rows(),
        }
    }
}

fn default_editor_min_rows() -> u16 {
    6
}

fn default_editor_max_rows() -> u16 {
    24
}

/// How report downloads are opened by the terminal host
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DownloadSettings {
    /// Browser command; empty = system default opener
    #[serde(default)]
    pub browser: String,
}
