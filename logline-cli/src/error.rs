use logline_config::ConfigError;
use logline_core::{FieldListError, TemplateError};
use logline_telemetry::LoggerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    FieldList(#[from] FieldListError),

    #[error("Invalid field list: {0}")]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logger(#[from] LoggerError),
}
