//! # logline configuration
//!
//! Layered configuration for the template logger.
//!
//! Layers, later ones winning:
//! 1. Default values
//! 2. `logline.yaml` in the working directory, if present
//! 3. `LOGLINE_*` environment variables (`__` separates nested keys)
//! 4. The legacy `LOGGING_LOG_FORMAT`, `LOGGING_LOG_LEVEL`,
//!    `LOGGING_TIME_FORMAT` and `LOGGING_LOG_FILE` variables

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use logline_core::Severity;
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod output;
mod validation;

pub use error::ConfigError;
pub use output::{OutputConfig, Stream};
pub use validation::{validate_template, validate_time_format};

pub const DEFAULT_FORMAT: &str = "%(asctime)s - %(levelname)s - %(message)s";
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_CONFIG_FILE: &str = "logline.yaml";

/// Everything a logger is built from.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Line template, `%(field)s` placeholders.
    #[serde(default = "default_format")]
    #[validate(custom(function = validation::validate_template))]
    pub format: String,

    /// Records below this severity are dropped.
    #[serde(default)]
    pub level: Severity,

    /// strftime pattern for `asctime`.
    #[serde(default = "default_time_format")]
    #[validate(custom(function = validation::validate_time_format))]
    pub time_format: String,

    #[serde(default)]
    #[validate(nested)]
    pub output: OutputConfig,
}

fn default_format() -> String {
    DEFAULT_FORMAT.into()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.into()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            level: Severity::default(),
            time_format: default_time_format(),
            output: OutputConfig::default(),
        }
    }
}

/// The `LOGGING_*` variables read by earlier releases.
fn legacy_env() -> Env {
    Env::prefixed("LOGGING_").filter_map(|key| {
        match key.as_str().to_ascii_lowercase().as_str() {
            "log_format" => Some("format".into()),
            "log_level" => Some("level".into()),
            "time_format" => Some("time_format".into()),
            "log_file" => Some("output.file".into()),
            _ => None,
        }
    })
}

impl LoggerConfig {
    pub fn new(format: impl Into<String>, level: Severity) -> Self {
        Self {
            format: format.into(),
            level,
            ..Self::default()
        }
    }

    /// Load configuration from the default file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None, &Overrides::default())
    }

    /// Load configuration from a specific file, which must exist.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_with(Some(path.as_ref()), &Overrides::default())
    }

    /// Load configuration with `overrides` as the last layer.
    ///
    /// Validation sees the merged result, so a value that is overridden is
    /// never checked.
    pub fn load_with(path: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(LoggerConfig::default()));

        match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            Some(path) => figment = figment.merge(Yaml::file(path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                figment = figment.merge(Yaml::file(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        let config: Self = figment
            .merge(Env::prefixed("LOGLINE_").split("__"))
            .merge(legacy_env())
            .merge(Serialized::defaults(overrides))
            .extract()?;
        config.validate()?;
        Ok(config)
    }
}

/// Values supplied by the caller that win over every other layer.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
}
