//! # logline telemetry
//!
//! Renders `tracing` events through a `%(field)s` template.
//!
//! A [`Logger`] is built from an explicit [`LoggerConfig`] and owns its
//! own dispatcher. Nothing global is touched unless [`Logger::install`] is
//! called.

pub mod emitter;
pub mod formatter;
pub mod logger;
pub mod logging;
pub mod sink;

pub use emitter::{emit_counter, SMOKE_RECORDS};
pub use formatter::TemplateFormatter;
pub use logger::{Logger, LoggerError};
pub use logging::EventLogger;
pub use logline_config::LoggerConfig;
pub use sink::{make_writer, BufferSink};
