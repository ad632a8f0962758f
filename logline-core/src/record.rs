//! Log record attributes and their text forms.

use std::fmt::Write;
use std::path::Path;

use crate::severity::Severity;

/// An attribute a template placeholder can name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    LevelNo,
    LevelName,
    PathName,
    FileName,
    FuncName,
    LineNo,
    Created,
    RelativeCreated,
    AscTime,
    Msecs,
    Thread,
    ThreadName,
    Process,
    Message,
    /// A structured field carried by the event itself.
    Extra(String),
}

impl Attribute {
    /// Every built-in attribute, in field list order.
    pub const KNOWN: [Attribute; 15] = [
        Attribute::Name,
        Attribute::LevelNo,
        Attribute::LevelName,
        Attribute::PathName,
        Attribute::FileName,
        Attribute::FuncName,
        Attribute::LineNo,
        Attribute::Created,
        Attribute::RelativeCreated,
        Attribute::AscTime,
        Attribute::Msecs,
        Attribute::Thread,
        Attribute::ThreadName,
        Attribute::Process,
        Attribute::Message,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "name" => Attribute::Name,
            "levelno" => Attribute::LevelNo,
            "levelname" => Attribute::LevelName,
            "pathname" => Attribute::PathName,
            "filename" => Attribute::FileName,
            "funcName" => Attribute::FuncName,
            "lineno" => Attribute::LineNo,
            "created" => Attribute::Created,
            "relativeCreated" => Attribute::RelativeCreated,
            "asctime" => Attribute::AscTime,
            "msecs" => Attribute::Msecs,
            "thread" => Attribute::Thread,
            "threadName" => Attribute::ThreadName,
            "process" => Attribute::Process,
            "message" => Attribute::Message,
            other => Attribute::Extra(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Attribute::Name => "name",
            Attribute::LevelNo => "levelno",
            Attribute::LevelName => "levelname",
            Attribute::PathName => "pathname",
            Attribute::FileName => "filename",
            Attribute::FuncName => "funcName",
            Attribute::LineNo => "lineno",
            Attribute::Created => "created",
            Attribute::RelativeCreated => "relativeCreated",
            Attribute::AscTime => "asctime",
            Attribute::Msecs => "msecs",
            Attribute::Thread => "thread",
            Attribute::ThreadName => "threadName",
            Attribute::Process => "process",
            Attribute::Message => "message",
            Attribute::Extra(name) => name,
        }
    }
}

/// Everything known about one emitted event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogRecord {
    /// Logger name; the event target.
    pub name: String,
    pub levelno: u32,
    pub pathname: String,
    /// Enclosing function, or the module path where only that is known.
    pub func_name: String,
    pub lineno: u32,
    /// Seconds since the Unix epoch.
    pub created: f64,
    /// Milliseconds since the logger was built.
    pub relative_created: f64,
    pub asctime: String,
    pub msecs: u32,
    pub thread: u64,
    pub thread_name: String,
    pub process: u32,
    pub message: String,
    pub extra: Vec<(String, String)>,
}

impl LogRecord {
    pub fn levelname(&self) -> &'static str {
        Severity::from_value(self.levelno).as_str()
    }

    /// Last path component of `pathname`.
    pub fn filename(&self) -> &str {
        Path::new(&self.pathname)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.pathname)
    }

    pub fn extra_value(&self, key: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends the text form of `attribute` to `out`.
    ///
    /// Unknown extras append nothing.
    pub fn write_attribute(&self, attribute: &Attribute, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = match attribute {
            Attribute::Name => write!(out, "{}", self.name),
            Attribute::LevelNo => write!(out, "{}", self.levelno),
            Attribute::LevelName => write!(out, "{}", self.levelname()),
            Attribute::PathName => write!(out, "{}", self.pathname),
            Attribute::FileName => write!(out, "{}", self.filename()),
            Attribute::FuncName => write!(out, "{}", self.func_name),
            Attribute::LineNo => write!(out, "{}", self.lineno),
            Attribute::Created => write!(out, "{:.6}", self.created),
            Attribute::RelativeCreated => write!(out, "{:.6}", self.relative_created),
            Attribute::AscTime => write!(out, "{}", self.asctime),
            Attribute::Msecs => write!(out, "{:03}", self.msecs),
            Attribute::Thread => write!(out, "{}", self.thread),
            Attribute::ThreadName => write!(out, "{}", self.thread_name),
            Attribute::Process => write!(out, "{}", self.process),
            Attribute::Message => write!(out, "{}", self.message),
            Attribute::Extra(key) => write!(out, "{}", self.extra_value(key).unwrap_or_default()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LogRecord {
        LogRecord {
            name: "smoke".into(),
            levelno: 20,
            pathname: "logline-cli/src/commands.rs".into(),
            lineno: 42,
            created: 1_700_000_000.25,
            msecs: 7,
            message: "i = 3".into(),
            extra: vec![("i".into(), "3".into())],
            ..Default::default()
        }
    }

    fn text(record: &LogRecord, attribute: Attribute) -> String {
        let mut out = String::new();
        record.write_attribute(&attribute, &mut out);
        out
    }

    #[test]
    fn known_names_round_trip() {
        for attribute in Attribute::KNOWN {
            assert_eq!(Attribute::from_name(attribute.as_str()), attribute);
        }
        assert_eq!(
            Attribute::from_name("request_id"),
            Attribute::Extra("request_id".into())
        );
    }

    #[test]
    fn renders_attribute_text() {
        let record = record();
        assert_eq!(text(&record, Attribute::LevelName), "INFO");
        assert_eq!(text(&record, Attribute::LevelNo), "20");
        assert_eq!(text(&record, Attribute::FileName), "commands.rs");
        assert_eq!(text(&record, Attribute::Msecs), "007");
        assert_eq!(text(&record, Attribute::Created), "1700000000.250000");
        assert_eq!(text(&record, Attribute::Extra("i".into())), "3");
        assert_eq!(text(&record, Attribute::Extra("missing".into())), "");
    }

    #[test]
    fn filename_without_directory_is_pathname() {
        let record = LogRecord {
            pathname: "main.rs".into(),
            ..Default::default()
        };
        assert_eq!(record.filename(), "main.rs");
    }

    #[test]
    fn trace_level_number_is_named_debug() {
        let record = LogRecord {
            levelno: 5,
            ..Default::default()
        };
        assert_eq!(record.levelname(), "DEBUG");
    }
}
