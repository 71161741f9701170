use std::sync::{Mutex, PoisonError};

/// Destination for fully formatted, already colored log lines.
///
/// The [`Logger`](crate::Logger) decides *whether* and *how* a line is
/// emitted; a sink only carries it to its destination. Production use is
/// [`StdoutSink`]; tests observe output through [`MemorySink`].
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes each line to standard output.
///
/// One `println!` per emission. Concurrent loggers sharing a process may
/// interleave whole emissions in any order; no cross-instance ordering is
/// guaranteed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    #[inline]
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Captures lines in memory so tests can assert on exactly what was emitted.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far, in write order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
