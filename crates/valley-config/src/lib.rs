//! Configuration system for the Waves and Valleys demo.
//!
//! Provides runtime-configurable settings that persist to disk as RON files,
//! with CLI overrides via clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, TerrainConfig, WindowConfig};
pub use error::ConfigError;
