//! Process-wide installation; kept in its own test binary.

use logline_core::Severity;
use logline_telemetry::{emit_counter, BufferSink, Logger, LoggerConfig, LoggerError};

#[test]
fn second_install_is_rejected() {
    let sink = BufferSink::default();
    let config = LoggerConfig::new("%(message)s", Severity::Info);

    Logger::with_writer(config.clone(), sink.clone())
        .unwrap()
        .install()
        .unwrap();
    emit_counter(2);
    assert_eq!(sink.lines(), vec!["i = 0", "i = 1"]);

    let again = Logger::with_writer(config, BufferSink::default())
        .unwrap()
        .install();
    assert!(matches!(again, Err(LoggerError::AlreadyInstalled)));

    emit_counter(1);
    assert_eq!(sink.lines().len(), 3);
}
