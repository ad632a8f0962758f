//! Sequential record emitter for smoke runs.

use tracing::info;

/// Records emitted by a smoke run.
pub const SMOKE_RECORDS: usize = 5;

/// Emits `count` INFO records, `i = 0` through `i = count - 1`.
///
/// The counter is also attached as the `i` field.
pub fn emit_counter(count: usize) {
    for i in 0..count {
        info!(i, "i = {}", i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BufferSink, Logger, LoggerConfig};
    use logline_core::Severity;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn emits_counter_messages() {
        emit_counter(SMOKE_RECORDS);
        assert!(logs_contain("i = 0"));
        assert!(logs_contain("i = 4"));
        assert!(!logs_contain("i = 5"));
    }

    #[test]
    fn five_records_in_order() {
        let sink = BufferSink::default();
        let config = LoggerConfig::new("%(levelname)s %(message)s ", Severity::Info);
        let logger = Logger::with_writer(config, sink.clone()).unwrap();

        logger.scope(|| emit_counter(SMOKE_RECORDS));

        assert_eq!(
            sink.lines(),
            vec![
                "INFO i = 0 ",
                "INFO i = 1 ",
                "INFO i = 2 ",
                "INFO i = 3 ",
                "INFO i = 4 ",
            ]
        );
    }

    #[test]
    fn counter_is_a_structured_field() {
        let sink = BufferSink::default();
        let config = LoggerConfig::new("%(i)d", Severity::Info);
        let logger = Logger::with_writer(config, sink.clone()).unwrap();

        logger.scope(|| emit_counter(3));

        assert_eq!(sink.lines(), vec!["0", "1", "2"]);
    }

    #[test]
    fn suppressed_above_info() {
        let sink = BufferSink::default();
        let config = LoggerConfig::new("%(message)s", Severity::Warning);
        let logger = Logger::with_writer(config, sink.clone()).unwrap();

        logger.scope(|| emit_counter(SMOKE_RECORDS));

        assert!(sink.is_empty());
    }
}
