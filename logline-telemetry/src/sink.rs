//! Output sinks for rendered lines.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use logline_config::{OutputConfig, Stream};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

use crate::logger::LoggerError;

/// Opens the sink described by `output`.
///
/// Files are opened for append and created when missing; each record is
/// written straight through.
pub fn make_writer(output: &OutputConfig) -> Result<BoxMakeWriter, LoggerError> {
    if let Some(path) = &output.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::Output {
                path: path.clone(),
                source,
            })?;
        return Ok(BoxMakeWriter::new(Mutex::new(file)));
    }

    Ok(match output.stream {
        Stream::Stderr => BoxMakeWriter::new(io::stderr),
        Stream::Stdout => BoxMakeWriter::new(io::stdout),
    })
}

/// In-memory sink; clones share one buffer.
#[derive(Clone, Default, Debug)]
pub struct BufferSink(Arc<Mutex<Vec<u8>>>);

impl BufferSink {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl Write for BufferSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferSink {
    type Writer = BufferSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn buffer_clones_share_contents() {
        let sink = BufferSink::default();
        let mut writer = sink.make_writer();
        writer.write_all(b"one\ntwo\n").unwrap();
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert!(!sink.is_empty());
    }

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        std::fs::write(&path, "existing\n").unwrap();

        let output = OutputConfig {
            file: Some(path.clone()),
            ..OutputConfig::default()
        };
        let make = make_writer(&output).unwrap();
        make.make_writer().write_all(b"appended\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing\nappended\n");
    }

    #[test]
    fn unopenable_file_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("missing-dir").join("out.log");
        let output = OutputConfig {
            file: Some(path.clone()),
            ..OutputConfig::default()
        };
        let err = make_writer(&output).err().unwrap();
        assert!(matches!(err, LoggerError::Output { path: p, .. } if p == path));
    }
}
