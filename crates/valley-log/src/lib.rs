//! Structured logging for the Waves and Valleys demo.
//!
//! Console output with timestamps and module paths via the `tracing`
//! ecosystem, plus optional JSON file logging in debug builds. The filter can
//! come from `RUST_LOG`, the config file, or the built-in default.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use valley_config::Config;

/// Initialize the tracing subscriber.
///
/// Filter resolution order: `RUST_LOG` if set, then the config's
/// `debug.log_level`, then `info,wgpu=warn,naga=warn`. When `debug_build` is
/// true and `log_dir` is given, a JSON file layer is added for post-mortem
/// analysis.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => {
            format!("{},wgpu=warn,naga=warn", config.debug.log_level)
        }
        _ => "info,wgpu=warn,naga=warn".to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("valleys.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string: `info` everywhere,
/// `warn` for the chatty `wgpu` and `naga` targets.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info,wgpu=warn,naga=warn")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_gpu_targets() {
        let filter = default_env_filter();
        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("wgpu=warn"));
        assert!(filter_str.contains("naga=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_config_log_level_builds_valid_filter() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        let filter_str = format!("{},wgpu=warn,naga=warn", config.debug.log_level);
        assert!(EnvFilter::try_from(filter_str.as_str()).is_ok());
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,valley_render=trace",
            "warn,valley_app=debug",
            "error",
        ];
        for filter_str in &valid_filters {
            assert!(
                EnvFilter::try_from(*filter_str).is_ok(),
                "failed to parse filter: {filter_str}"
            );
        }
    }

    #[test]
    fn test_log_dir_is_creatable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("logs");
        std::fs::create_dir_all(&log_path).unwrap();
        assert!(log_path.is_dir());
    }
}
