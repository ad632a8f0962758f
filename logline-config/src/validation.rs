//! Custom validation functions for configuration.

use std::borrow::Cow;

use chrono::format::{Item, StrftimeItems};
use logline_core::Template;
use validator::ValidationError;

/// Validate that a log format compiles as a template.
pub fn validate_template(format: &str) -> Result<(), ValidationError> {
    Template::parse(format).map(|_| ()).map_err(|err| {
        ValidationError::new("invalid_template").with_message(Cow::Owned(err.to_string()))
    })
}

/// Validate that a time format is a usable strftime pattern.
pub fn validate_time_format(format: &str) -> Result<(), ValidationError> {
    if format.is_empty() {
        return Err(ValidationError::new("empty_time_format"));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ValidationError::new("invalid_time_format"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_validation() {
        assert!(validate_template("%(asctime)s %(message)s").is_ok());
        assert!(validate_template("plain text").is_ok());

        let err = validate_template("%(no good)s").unwrap_err();
        assert_eq!(err.code, "invalid_template");
        assert!(err.message.unwrap().contains("no good"));
    }

    #[test]
    fn time_format_validation() {
        assert!(validate_time_format("%Y-%m-%d %H:%M:%S").is_ok());
        assert!(validate_time_format("%s").is_ok());
        assert!(validate_time_format("").is_err());
        assert!(validate_time_format("%Q").is_err());
    }
}
