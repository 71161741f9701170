//! huelog is a minimal leveled console logger with color-coded output.
//!
//! A [`Logger`] is built with a severity level string (default `"info"`) and
//! exposes one method per severity: `trace`, `debug`, `info`, `warn`,
//! `error`, `fatal`. Calls ranking below the configured level are silently
//! suppressed; calls at or above it print a colored, multi-line message to
//! standard output. Setting the level to `"off"` mutes everything, and an
//! unrecognized level turns every call into a magenta diagnostic naming the
//! bad value and the valid set.
//!
//! The crate is intentionally small: no files, no rotation, no structured
//! output, no configuration beyond the constructor argument.
//!
//! ```
//! use huelog::{Logger, LogRecord};
//!
//! let logger = Logger::new("info");
//! logger.warn(
//!     &LogRecord::new("retry budget exhausted", "fetch::backoff")
//!         .with_status(429)
//!         .with_notes(["giving up after 5 attempts"]),
//! );
//! ```

/// The ordered severity levels and their fixed colors.
pub mod log_level;
/// The per-call payload and its rendering rules.
pub mod log_record;
/// Output destinations for formatted lines.
pub mod log_sink;
/// The logger itself: filtering policy and emission.
pub mod logger;

pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use log_sink::{LogSink, MemorySink, StdoutSink};
pub use logger::Logger;
