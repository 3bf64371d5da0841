//! Strongly-typed configuration.
//!
//! Loaded with `figment` from, in increasing priority:
//! 1. built-in defaults
//! 2. an optional TOML file (`nlpflow.toml` by default)
//! 3. environment variables prefixed with `NLPFLOW_`, nested with `__`
//!    (e.g. `NLPFLOW_EXECUTION__ENDPOINT=http://runner:8000/api`)
//!
//! # Example
//! ```no_run
//! use nlpflow::config::NlpflowConfig;
//!
//! let config = NlpflowConfig::load()?;
//! println!("Executing scripts at {}", config.execution.endpoint);
//! # Ok::<(), nlpflow::error::ConfigError>(())
//! ```

use crate::compiler::DEFAULT_SAMPLE_TEXT;
use crate::error::ConfigError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "nlpflow.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpflowConfig {
    pub execution: ExecutionConfig,
    pub compiler: CompilerConfig,
    pub logging: LoggingConfig,
}

/// Where generated scripts are sent to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Base URL of the execution service; requests go to `<endpoint>/execute`.
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Used when the input node carries no label.
    pub default_sample_text: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            default_sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    pub format: LogFormat,
    /// Colour the output. Applies to every format; set it to `false` when logs go to a file.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            ansi: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl NlpflowConfig {
    /// Load configuration from `nlpflow.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from a specific file path. A missing file is not an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("NLPFLOW_").split("__"))
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string, without consulting the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        if self.execution.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "execution.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if !(self.execution.endpoint.starts_with("http://")
            || self.execution.endpoint.starts_with("https://"))
        {
            return Err(ConfigError::Invalid(format!(
                "execution.endpoint '{}' must be an http(s) URL",
                self.execution.endpoint
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = NlpflowConfig::from_toml_str("").unwrap();
        assert_eq!(config, NlpflowConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = NlpflowConfig::from_toml_str(
            r#"
            [execution]
            endpoint = "https://runner.internal/api"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.execution.endpoint, "https://runner.internal/api");
        assert_eq!(config.execution.timeout_secs, 30);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn ansi_defaults_on_and_can_be_disabled() {
        assert!(NlpflowConfig::default().logging.ansi);
        let config =
            NlpflowConfig::from_toml_str("[logging]\nformat = \"compact\"\nansi = false").unwrap();
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(!config.logging.ansi);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = NlpflowConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("loud")));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = NlpflowConfig::from_toml_str("[execution]\ntimeout_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
