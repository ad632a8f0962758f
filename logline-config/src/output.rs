//! Output sink configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Console stream used when no file is configured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[default]
    Stderr,
    Stdout,
}

/// Where rendered lines go.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Console stream, ignored when `file` is set.
    #[serde(default)]
    pub stream: Stream,

    /// Log file, opened for append and created if missing.
    #[serde(default)]
    #[validate(custom(function = validate_file_path))]
    pub file: Option<PathBuf>,
}

fn validate_file_path(path: &PathBuf) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_log_file"));
    }
    Ok(())
}
