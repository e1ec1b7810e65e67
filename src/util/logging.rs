//! Structured logging setup for gwtrun
//!
//! This module provides initialization and configuration for structured logging using
//! the `tracing` ecosystem. It supports console and JSON output, filtering, and
//! runtime configuration via environment variables.
//!
//! The tool's own verbosity also feeds the forked GWT process: when no
//! explicit `-logLevel` is configured, the launcher derives one from the
//! level installed here.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format (for structured logging in CI)
    pub use_json: bool,

    /// Include the module target (e.g., gwtrun::resolve) in logs
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
        }
    }
}

/// Parses a log level from a string, defaulting to INFO on bad input.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes logging from the global CLI flags.
///
/// Precedence: explicit `--log-level`, then `-v`/`-q`, then the
/// `GWTRUN_LOG_LEVEL` environment variable, then INFO. `RUST_LOG` always
/// wins when set. JSON output can be requested with `GWTRUN_LOG_JSON=true`.
pub fn init_from_args(log_level: Option<&str>, verbose: bool, quiet: bool) {
    let level = if let Some(level_str) = log_level {
        parse_level(level_str)
    } else if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        let level_str = env::var("GWTRUN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    let use_json = env::var("GWTRUN_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    init_logging(LoggingConfig {
        level,
        use_json,
        ..Default::default()
    });
}

/// Initializes the logging system with the provided configuration.
///
/// Can only be called once - subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(format!("gwtrun={}", config.level).parse().unwrap());
        }

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
