//! Garagem - terminal client for a vehicle registry REST API
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use garagem_api::HttpVehicleClient;
use garagem_app::config;
use garagem_core::prelude::*;

/// Garagem - list, inspect, create, edit and delete vehicles
#[derive(Parser, Debug)]
#[command(name = "garagem")]
#[command(about = "Terminal client for the Garagem vehicle registry", long_about = None)]
struct Args {
    /// Registry base URL (overrides GARAGEM_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Config file (default: <config_dir>/garagem/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (stdin commands, NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    if args.init_config {
        let Some(path) = args.config.clone().or_else(config::default_config_path) else {
            eprintln!("No config directory available; pass --config <PATH>");
            std::process::exit(1);
        };
        if config::init_config_file(&path)? {
            eprintln!("Created {}", path.display());
        } else {
            eprintln!("{} already exists, left unchanged", path.display());
        }
        return Ok(());
    }

    garagem_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    settings.api.base_url = config::resolve_api_url(&settings, args.api_url.as_deref());
    info!(
        "Using registry at {} (timeout {}ms)",
        settings.api.base_url, settings.api.timeout_ms
    );

    let api = match HttpVehicleClient::new(&settings.api.base_url, settings.api.timeout()) {
        Ok(api) => api,
        Err(e) if e.is_fatal() => {
            error!("Invalid registry URL: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        Err(e) => return Err(e),
    };

    if args.headless {
        garagem::run_headless(settings, api).await
    } else {
        garagem_tui::run(settings, api).await
    }
}
