//! Diagnostics for the logline binary itself.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

pub struct EventLogger;

impl EventLogger {
    /// Installs a stderr subscriber filtered by `RUST_LOG`, `warn` when unset.
    ///
    /// Template loggers run scoped, so they take precedence over this one
    /// while active.
    pub fn init() {
        let installed = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .try_init();
        if let Err(err) = installed {
            tracing::debug!(error = %err, "diagnostics subscriber already installed");
        }
    }
}
