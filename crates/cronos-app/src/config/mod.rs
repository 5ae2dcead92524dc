//! Configuration file parsing for the CRONOS console
//!
//! Supports:
//! - `.cronos/config.toml` - Project settings (working directory)
//! - `<user config dir>/cronos/config.toml` - Fallback when the project has none

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, user_config_path};
pub use types::*;
