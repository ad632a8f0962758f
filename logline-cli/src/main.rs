//! ## logline-cli
//! **Template logger smoke runs**
//!
//! `logline smoke` reads a field list, builds a `%(field)s ` template from
//! it, configures an INFO logger and emits five counter records.

use std::process::ExitCode;

use clap::Parser;
use logline_telemetry::EventLogger;

mod commands;
mod error;

use commands::Cli;

fn main() -> ExitCode {
    EventLogger::init();
    let cli = Cli::parse();

    match commands::run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("logline: {err}");
            ExitCode::FAILURE
        }
    }
}
