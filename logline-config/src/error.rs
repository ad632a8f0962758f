use std::path::PathBuf;

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Logger config file {0} does not exist")]
    FileNotFound(PathBuf),

    #[error("Rejected logger config: {}", describe(.0))]
    Validation(#[from] ValidationErrors),

    #[error("Cannot read logger config: {0}")]
    Parsing(#[from] figment::Error),
}

/// `field: reason` pairs, ordered by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut reasons = Vec::new();
    for (field, errors) in fields {
        for error in errors {
            let reason = error.message.as_deref().unwrap_or(error.code.as_ref());
            reasons.push(format!("{field}: {reason}"));
        }
    }
    reasons.join("; ")
}
