use std::sync::Arc;

use colored::Colorize;

use crate::{
    log_level::LogLevel,
    log_record::LogRecord,
    log_sink::{LogSink, StdoutSink},
};

/// Leveled, color-coded console logger.
///
/// A `Logger` holds one piece of filtering state: the configured level
/// string. It is stored verbatim at construction (default `"info"`) and
/// re-checked against the valid set on **every** call; construction never
/// validates or normalizes it. To change the threshold later, assign the
/// [`level`](Self::level) field directly.
///
/// Each of the six severity methods takes a [`LogRecord`] and either:
/// - prints one magenta diagnostic if the configured level is not a valid
///   level name (this check runs first, whatever method was called),
/// - suppresses the call silently when the method's severity ranks below the
///   configured level,
/// - or prints the record, colored by the **called method's** severity.
///
/// Setting `level` to `"off"` mutes all six methods: `off` holds the highest
/// rank and has no method of its own.
///
/// # Examples
/// ```
/// use huelog::{Logger, LogRecord};
///
/// let logger = Logger::new("warn");
/// logger.info(&LogRecord::new("cache miss", "store::get")); // suppressed
/// logger.error(&LogRecord::new("upstream refused", "gateway").with_status(502));
/// ```
pub struct Logger {
    /// The configured level, verbatim. Reassign directly to retune filtering.
    pub level: String,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Creates a logger writing to standard output.
    ///
    /// `level` is stored as given; validity is only checked when a logging
    /// method runs.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self::with_sink(level, Arc::new(StdoutSink))
    }

    /// Creates a logger writing to an arbitrary sink.
    ///
    /// Filtering and formatting are identical to [`new`](Self::new); only the
    /// destination changes. This is the seam the test suites use.
    #[must_use]
    pub fn with_sink(level: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            level: level.into(),
            sink,
        }
    }

    /// Logs at `trace` severity (rank 0, cyan).
    pub fn trace(&self, record: &LogRecord) {
        self.emit(LogLevel::Trace, record);
    }

    /// Logs at `debug` severity (rank 1, blue).
    pub fn debug(&self, record: &LogRecord) {
        self.emit(LogLevel::Debug, record);
    }

    /// Logs at `info` severity (rank 2, green).
    pub fn info(&self, record: &LogRecord) {
        self.emit(LogLevel::Info, record);
    }

    /// Logs at `warn` severity (rank 3, yellow).
    pub fn warn(&self, record: &LogRecord) {
        self.emit(LogLevel::Warn, record);
    }

    /// Logs at `error` severity (rank 4, red).
    pub fn error(&self, record: &LogRecord) {
        self.emit(LogLevel::Error, record);
    }

    /// Logs at `fatal` severity (rank 5, red background).
    ///
    /// "Fatal" names the severity only; the call returns normally like every
    /// other method.
    pub fn fatal(&self, record: &LogRecord) {
        self.emit(LogLevel::Fatal, record);
    }

    /// The single routine behind all six public methods.
    ///
    /// Order matters: the invalid-level check precedes the threshold check,
    /// so a bad configured level yields the diagnostic even for a severity
    /// that would otherwise have been suppressed.
    fn emit(&self, severity: LogLevel, record: &LogRecord) {
        let Some(threshold) = LogLevel::parse(&self.level) else {
            self.sink
                .write_line(&invalid_level_diagnostic(&self.level).magenta().to_string());
            return;
        };
        if severity.rank() < threshold.rank() {
            return;
        }
        self.sink
            .write_line(&severity.paint(&record.render()).to_string());
    }
}

impl Default for Logger {
    /// A stdout logger at level `"info"`.
    fn default() -> Self {
        Self::new("info")
    }
}

/// The uncolored text of the invalid-level diagnostic: the literal configured
/// value, a fixed sentence, and the full valid-level list.
fn invalid_level_diagnostic(level: &str) -> String {
    format!(
        "\"{level}\" is not a valid log level. Valid levels are: {}",
        LogLevel::valid_names()
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log_sink::MemorySink;

    fn capture(level: &str) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::with_sink(level, sink.clone());
        (logger, sink)
    }

    #[test]
    fn default_logger_is_info() {
        assert_eq!(Logger::default().level, "info");
    }

    #[test]
    fn construction_stores_the_level_verbatim() {
        // No validation, no trimming, no lowercasing at construction time.
        let (logger, sink) = capture(" INFO ");
        assert_eq!(logger.level, " INFO ");
        assert!(sink.lines().is_empty(), "construction must not emit");
    }

    #[test]
    fn below_threshold_calls_are_silent() {
        let (logger, sink) = capture("warn");
        logger.info(&LogRecord::new("A", "L"));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn at_and_above_threshold_calls_emit() {
        let (logger, sink) = capture("warn");
        logger.warn(&LogRecord::new("A", "L"));
        logger.fatal(&LogRecord::new("B", "M"));
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn off_mutes_every_method() {
        let (logger, sink) = capture("off");
        let rec = LogRecord::new("A", "L").with_status(500).with_notes(["n"]);
        logger.trace(&rec);
        logger.debug(&rec);
        logger.info(&rec);
        logger.warn(&rec);
        logger.error(&rec);
        logger.fatal(&rec);
        assert!(sink.lines().is_empty(), "\"off\" must suppress everything");
    }

    #[test]
    fn invalid_level_diagnoses_instead_of_logging() {
        colored::control::set_override(true);
        let (logger, sink) = capture("bogus");
        logger.trace(&LogRecord::new("A", "L"));
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"bogus\" is not a valid log level"));
        assert!(lines[0].contains("trace, debug, info, warn, error, fatal, off"));
        assert!(
            lines[0].starts_with("\u{1b}[35m"),
            "diagnostic should be magenta: {:?}",
            lines[0]
        );
        assert!(!lines[0].contains("A at L"), "no log line may follow");
    }

    #[test]
    fn invalid_level_check_wins_over_suppression() {
        // "Fatal" (wrong case) is invalid; even a trace call on what would
        // otherwise look like a restrictive level must diagnose.
        let (logger, sink) = capture("Fatal");
        logger.trace(&LogRecord::new("A", "L"));
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"Fatal\" is not a valid log level"));
    }

    #[test]
    fn each_method_diagnoses_the_same_invalid_level() {
        let (logger, sink) = capture("verbose");
        let rec = LogRecord::new("A", "L");
        logger.trace(&rec);
        logger.debug(&rec);
        logger.info(&rec);
        logger.warn(&rec);
        logger.error(&rec);
        logger.fatal(&rec);
        let lines = sink.lines();
        assert_eq!(lines.len(), 6);
        assert!(
            lines
                .iter()
                .all(|l| l.contains("\"verbose\" is not a valid log level"))
        );
    }

    #[test]
    fn reassigning_the_level_retunes_filtering() {
        let sink = Arc::new(MemorySink::new());
        let mut logger = Logger::with_sink("error", sink.clone());
        logger.info(&LogRecord::new("A", "L"));
        assert!(sink.lines().is_empty());

        logger.level = "trace".to_string();
        logger.info(&LogRecord::new("A", "L"));
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn color_follows_the_called_method_not_the_threshold() {
        colored::control::set_override(true);
        let (logger, sink) = capture("trace");
        logger.fatal(&LogRecord::new("A", "L"));
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(
            lines[0].starts_with("\u{1b}[41m"),
            "fatal must use its red background even at threshold trace: {:?}",
            lines[0]
        );
    }

    #[test]
    fn diagnostic_text_is_stable() {
        assert_eq!(
            invalid_level_diagnostic("x"),
            "\"x\" is not a valid log level. Valid levels are: trace, debug, info, warn, error, fatal, off"
        );
    }
}
