//! Numeric severity scale.
//!
//! Levels are spaced by ten, so any integer can be placed on the scale: a
//! number resolves to the first named level at or above it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SeverityError;

/// Record severity, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    NotSet,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::NotSet,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn value(self) -> u32 {
        match self {
            Severity::NotSet => 0,
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
            Severity::Critical => 50,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::NotSet => "NOTSET",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Places an arbitrary level number on the scale.
    pub fn from_value(value: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.value() >= value)
            .unwrap_or(Severity::Critical)
    }

    /// Level number of a `tracing` level.
    pub fn value_of(level: &tracing::Level) -> u32 {
        match *level {
            tracing::Level::TRACE => 5,
            tracing::Level::DEBUG => 10,
            tracing::Level::INFO => 20,
            tracing::Level::WARN => 30,
            tracing::Level::ERROR => 40,
        }
    }

    /// Most verbose `tracing` level this threshold lets through.
    pub fn max_tracing_level(self) -> tracing::Level {
        match self {
            Severity::NotSet => tracing::Level::TRACE,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warning => tracing::Level::WARN,
            // tracing stops at ERROR
            Severity::Error | Severity::Critical => tracing::Level::ERROR,
        }
    }
}

impl From<&tracing::Level> for Severity {
    fn from(level: &tracing::Level) -> Self {
        Severity::from_value(Severity::value_of(level))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u32>() {
            return Ok(Severity::from_value(value));
        }

        match trimmed.to_ascii_uppercase().as_str() {
            "NOTSET" => Ok(Severity::NotSet),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRIT" | "CRITICAL" => Ok(Severity::Critical),
            _ => Err(SeverityError::Unknown(s.to_string())),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeveritySpec {
    Number(u32),
    Name(String),
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SeveritySpec::deserialize(deserializer)? {
            SeveritySpec::Number(value) => Ok(Severity::from_value(value)),
            SeveritySpec::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
