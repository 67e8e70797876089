//! Settings loading, default file creation and API URL resolution

use std::path::{Path, PathBuf};

use garagem_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "garagem";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding the configured base URL
pub const API_URL_ENV: &str = "GARAGEM_API_URL";

const DEFAULT_CONFIG: &str = r#"# Garagem Configuration

[api]
base_url = "http://localhost:3000"   # Registry serving /veiculos
timeout_ms = 10000                   # Per-request timeout

[behavior]
confirm_quit = false                 # Ask before quitting from the list

[ui]
tick_rate_ms = 50                    # Input poll / spinner interval
"#;

/// `<config_dir>/garagem/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path` (or the default location).
///
/// A missing file yields defaults; an unreadable or invalid one yields
/// defaults with a warning.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            debug!("No config directory available, using defaults");
            return Settings::default();
        }
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
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

/// Write the commented default config to `path`.
///
/// Returns `Ok(false)` without touching an existing file.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        debug!("Config file {:?} already exists", path);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}

/// Effective base URL: CLI flag > `GARAGEM_API_URL` > config file > default.
pub fn resolve_api_url(settings: &Settings, cli: Option<&str>) -> String {
    resolve_api_url_with(settings, cli, std::env::var(API_URL_ENV).ok())
}

/// [`resolve_api_url`] with the environment value passed in
pub fn resolve_api_url_with(settings: &Settings, cli: Option<&str>, env: Option<String>) -> String {
    let non_empty = |s: &str| !s.trim().is_empty();

    if let Some(url) = cli.filter(|s| non_empty(s)) {
        return url.trim().to_string();
    }
    if let Some(url) = env.filter(|s| non_empty(s)) {
        return url.trim().to_string();
    }
    settings.api.base_url.trim().to_string()
}
