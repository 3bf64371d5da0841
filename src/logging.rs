//! Log subscriber setup.
//!
//! The library itself only emits `tracing` events; binaries call [`init`] once at startup.
//! `RUST_LOG` takes precedence over the configured level when it is set.

use crate::config::{LogFormat, LoggingConfig};
use crate::error::ConfigError;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))
}
