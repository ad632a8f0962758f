use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logline_config::{LoggerConfig, Overrides};
use logline_core::{load_field_names, Attribute, Severity, Template, DEFAULT_EXCLUDED};
use logline_telemetry::{emit_counter, make_writer, Logger, SMOKE_RECORDS};
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "logline", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a template from a field list and emit counter records through it
    Smoke(SmokeArgs),
    /// Print the template built from a field list
    Template(FieldListArgs),
    /// Print every built-in record attribute, one per line
    Fields,
}

#[derive(Args, Debug, Clone)]
pub struct FieldListArgs {
    /// Field list file, one attribute name per line
    #[arg(short, long, default_value = "logging_variables.txt")]
    pub fields: PathBuf,
    /// More field names to leave out of the template (repeatable);
    /// funcName is always left out
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SmokeArgs {
    #[command(flatten)]
    pub list: FieldListArgs,
    /// Number of records to emit
    #[arg(long, default_value_t = SMOKE_RECORDS)]
    pub count: usize,
    /// Minimum severity, by name or number
    #[arg(long, default_value = "INFO")]
    pub level: Severity,
    /// Configuration file; `logline.yaml` is used when present otherwise
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run_command(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Smoke(args) => run_smoke(&args),
        Commands::Template(args) => {
            println!("{}", template_for(&args)?);
            Ok(())
        }
        Commands::Fields => {
            for attribute in Attribute::KNOWN {
                println!("{}", attribute.as_str());
            }
            Ok(())
        }
    }
}

fn template_for(args: &FieldListArgs) -> Result<Template, CliError> {
    let excluded: Vec<&str> = DEFAULT_EXCLUDED
        .iter()
        .copied()
        .chain(args.exclude.iter().map(String::as_str))
        .collect();
    let fields = load_field_names(&args.fields, &excluded)?;
    Ok(Template::from_fields(&fields)?)
}

/// Resolves the smoke logger configuration.
///
/// The field list is read first, so a missing file fails before any
/// logger exists. The built template and `--level` are the last config
/// layer; formats set in files or the environment are ignored.
pub fn smoke_config(args: &SmokeArgs) -> Result<LoggerConfig, CliError> {
    let template = template_for(&args.list)?;
    let overrides = Overrides {
        format: Some(template.to_string()),
        level: Some(args.level),
    };
    let config = LoggerConfig::load_with(args.config.as_deref(), &overrides)?;
    info!(template = %template, level = %args.level, "smoke logger resolved");
    Ok(config)
}

pub fn run_smoke(args: &SmokeArgs) -> Result<(), CliError> {
    let config = smoke_config(args)?;
    let writer = make_writer(&config.output)?;
    smoke(config, writer, args.count)
}

fn smoke<W>(config: LoggerConfig, writer: W, count: usize) -> Result<(), CliError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let logger = Logger::with_writer(config, writer)?;
    logger.scope(|| emit_counter(count));
    Ok(())
}
