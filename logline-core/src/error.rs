use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldListError {
    #[error("Field list not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error reading field list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Invalid field name {name:?} in placeholder at byte {offset}")]
    InvalidFieldName { name: String, offset: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeverityError {
    #[error("Unknown severity level: {0}")]
    Unknown(String),
}
