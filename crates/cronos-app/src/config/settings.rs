//! Settings loading and default config generation

use std::path::{Path, PathBuf};

use cronos_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CRONOS_DIR: &str = ".cronos";
const APP_DIR: &str = "cronos";

/// Path of the project config file under `project_path`
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(CRONOS_DIR).join(CONFIG_FILENAME)
}

/// Path of the per-user config file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `.cronos/config.toml`, then the user config file
///
/// Returns default settings if neither exists or the one found can't be
/// parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let project_config = config_path(project_path);
    if project_config.exists() {
        return load_from(&project_config);
    }

    match user_config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => {
            debug!("No config file at {:?}, using defaults", project_config);
            Settings::default()
        }
    }
}

fn load_from(config_path: &Path) -> Settings {
    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the default config file in `.cronos/`
///
/// An existing file is left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let cronos_dir = project_path.join(CRONOS_DIR);

    if !cronos_dir.exists() {
        std::fs::create_dir_all(&cronos_dir)
            .map_err(|e| Error::config(format!("Failed to create .cronos dir: {}", e)))?;
    }

    let config_path = cronos_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(())
}

fn generate_default_config() -> String {
    r#"# CRONOS Console Configuration

[server]
base_url = "http://127.0.0.1:8000"
timeout_secs = 120      # Per-request timeout

[ui]
editor_min_rows = 6     # Text areas never shrink below this
editor_max_rows = 24    # ...nor grow beyond this

[downloads]
browser = ""            # Empty = system default
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let cronos_dir = temp.path().join(".cronos");
        std::fs::create_dir_all(&cronos_dir).unwrap();

        let config = r#"
[server]
base_url = "https://analyzer.internal:9443"

[ui]
editor_min_rows = 4
"#;
        std::fs::write(cronos_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.server.base_url, "https://analyzer.internal:9443");
        assert_eq!(settings.server.timeout_secs, 120);
        assert_eq!(settings.ui.editor_min_rows, 4);
        assert_eq!(settings.ui.editor_max_rows, 24);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let cronos_dir = temp.path().join(".cronos");
        std::fs::create_dir_all(&cronos_dir).unwrap();

        std::fs::write(cronos_dir.join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = config_path(temp.path());
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = config_path(temp.path());
        std::fs::write(&path, "[server]\ntimeout_secs = 9\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("timeout_secs = 9"));
    }
}
