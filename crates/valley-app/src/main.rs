//! The binary entry point for the Waves and Valleys demo.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};

use valley_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("waves-and-valleys")
    });

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_dir.display());
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    valley_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Starting {} ({}x{}, grid {}x{})",
        config.window.title,
        config.window.width,
        config.window.height,
        config.terrain.rows,
        config.terrain.cols
    );

    if config.terrain.rows < 2 || config.terrain.cols < 2 {
        warn!("Terrain grid must be at least 2x2, using defaults");
        config.terrain.rows = config.terrain.rows.max(2);
        config.terrain.cols = config.terrain.cols.max(2);
    }

    if let Err(e) = valley_app::run(config) {
        error!("Event loop error: {e}");
        std::process::exit(1);
    }
}
