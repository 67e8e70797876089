//! Configuration file parsing for Garagem
//!
//! Supports `<config_dir>/garagem/config.toml` (or a path given on the command
//! line), overridden by `GARAGEM_API_URL` and the `--api-url` flag.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, resolve_api_url, resolve_api_url_with,
    API_URL_ENV,
};
pub use types::*;
