//! Shared components for CLI commands
//!
//! Logging setup and configuration loading used by every command.

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::args::Args;
use crate::config::Config;

/// Load layered configuration and apply argument validation
pub fn load_configuration(args: &Args) -> Result<Config> {
    args.validate()?;

    let config = Config::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;

    Ok(config)
}

/// Log which configuration file is in effect
///
/// Call after `setup_logging` so the message reaches the subscriber.
pub fn log_configuration_source(args: &Args) {
    match Config::resolve_path(args.config_file.as_deref()) {
        Some(path) => debug!("Loaded configuration from {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }
}

/// Build the tracing filter directive for `level`
pub fn filter_directive(level: &str) -> String {
    format!("macro_analyzer={}", level.to_lowercase())
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the flags and configuration.
pub fn setup_logging(args: &Args, config: &Config) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level(&config.logging.level);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}
