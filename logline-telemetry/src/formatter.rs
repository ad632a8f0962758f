//! ## logline-telemetry::formatter
//! **`tracing` event formatter backed by a template**
//!
//! Each event becomes a [`LogRecord`]: the target is the logger name, the
//! module path stands in for the function name, and the event's fields
//! supply the message and any extra attributes.

use std::fmt::{self, Write};
use std::thread::ThreadId;
use std::time::Instant;

use chrono::Local;
use logline_core::{Attribute, LogRecord, Severity, Template};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub struct TemplateFormatter {
    template: Template,
    time_format: String,
    started: Instant,
}

impl TemplateFormatter {
    pub fn new(template: Template, time_format: impl Into<String>) -> Self {
        Self {
            template,
            time_format: time_format.into(),
            started: Instant::now(),
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn record(&self, event: &Event<'_>) -> LogRecord {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let now = Local::now();
        let created = now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1e6;

        let mut asctime = String::new();
        if self.template.uses(&Attribute::AscTime) {
            // time_format is validated with the rest of the config
            let _ = write!(asctime, "{}", now.format(&self.time_format));
        }

        let thread = std::thread::current();

        LogRecord {
            name: meta.target().to_string(),
            levelno: Severity::value_of(meta.level()),
            pathname: meta.file().unwrap_or("<unknown>").to_string(),
            func_name: meta.module_path().unwrap_or("<unknown function>").to_string(),
            lineno: meta.line().unwrap_or_default(),
            created,
            relative_created: self.started.elapsed().as_secs_f64() * 1000.0,
            asctime,
            msecs: now.timestamp_subsec_millis().min(999),
            thread: thread_ordinal(thread.id()),
            thread_name: thread.name().unwrap_or("UnknownThread").to_string(),
            process: std::process::id(),
            message: fields.message,
            extra: fields.extra,
        }
    }
}

impl<S, N> FormatEvent<S, N> for TemplateFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let record = self.record(event);
        writer.write_str(&self.template.render(&record))
    }
}

/// Numeric part of a `ThreadId`.
fn thread_ordinal(id: ThreadId) -> u64 {
    format!("{id:?}")
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or_default()
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    extra: Vec<(String, String)>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.extra.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}
