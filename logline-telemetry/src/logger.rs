//! ## logline-telemetry::logger
//! **Template logger built from an explicit configuration**
//!
//! A [`Logger`] owns a dispatcher; emitting through it means running code
//! inside [`Logger::scope`]. [`Logger::install`] makes it the process
//! default and can succeed only once per process.

use std::path::PathBuf;

use logline_config::{ConfigError, LoggerConfig};
use logline_core::{Template, TemplateError};
use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use validator::{Validate, ValidationErrors};

use crate::formatter::TemplateFormatter;
use crate::sink;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid log format: {0}")]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot open log output {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A process-wide logger is already installed")]
    AlreadyInstalled,
}

impl From<ValidationErrors> for LoggerError {
    fn from(errors: ValidationErrors) -> Self {
        LoggerError::Config(ConfigError::Validation(errors))
    }
}

/// Compiles the template, then validates the rest of `config`.
///
/// Bad field names are reported as template errors.
fn compile(config: &LoggerConfig) -> Result<Template, LoggerError> {
    let template = Template::parse(&config.format)?;
    config.validate()?;
    Ok(template)
}

pub struct Logger {
    config: LoggerConfig,
    dispatch: Dispatch,
}

impl Logger {
    /// Builds a logger writing to the sink named in `config.output`.
    ///
    /// The sink is opened only once the config has been accepted.
    pub fn new(config: LoggerConfig) -> Result<Self, LoggerError> {
        let template = compile(&config)?;
        let writer = sink::make_writer(&config.output)?;
        Ok(Self::assemble(config, template, writer))
    }

    /// Builds a logger writing to `make_writer`, ignoring `config.output`.
    pub fn with_writer<W>(config: LoggerConfig, make_writer: W) -> Result<Self, LoggerError>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let template = compile(&config)?;
        Ok(Self::assemble(config, template, make_writer))
    }

    fn assemble<W>(config: LoggerConfig, template: Template, make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let formatter = TemplateFormatter::new(template, config.time_format.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(config.level.max_tracing_level())
            .with_writer(make_writer)
            .event_format(formatter)
            .finish();

        tracing::debug!(
            format = %config.format,
            level = %config.level,
            "template logger configured"
        );

        Self {
            config,
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this logger as the current thread's default.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Makes this logger the process-wide default.
    pub fn install(self) -> Result<(), LoggerError> {
        tracing::dispatcher::set_global_default(self.dispatch)
            .map_err(|_| LoggerError::AlreadyInstalled)
    }
}
