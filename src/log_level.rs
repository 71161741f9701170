use colored::{ColoredString, Colorize};

/// Defines the severity levels a [`Logger`](crate::Logger) filters on.
///
/// Variants are declared in ascending rank order; [`Off`](LogLevel::Off) is
/// the highest rank, has no logging method, and therefore mutes everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Designates very fine-grained informational events.
    Trace,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info,
    /// Designates potentially harmful situations.
    Warn,
    /// Designates error events that might still allow the application to continue running.
    Error,
    /// Designates severe error events presumed to abort the operation at hand.
    Fatal,
    /// Suppresses every logging method; not a callable severity.
    Off,
}

impl LogLevel {
    /// Every level, in ascending rank order. The threshold comparison and the
    /// invalid-level diagnostic both read from this table.
    pub const ORDERED: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Off,
    ];

    /// Zero-based position in [`ORDERED`](Self::ORDERED): `Trace` is 0, `Off` is 6.
    #[must_use]
    pub fn rank(self) -> usize {
        self as usize
    }

    /// The level's config name, always lowercase.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Off => "off",
        }
    }

    /// Resolves a configured level string to a level.
    ///
    /// The match is exact and case-sensitive: `"info"` resolves, while
    /// `"Info"`, `"INFO"`, and `" info"` all return `None`. Configured levels
    /// are never trimmed or lowercased, so a `None` here means the caller
    /// configured something outside the valid set.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ORDERED.iter().copied().find(|l| l.as_str() == value)
    }

    /// The complete valid-level list, joined for the invalid-level diagnostic.
    #[must_use]
    pub fn valid_names() -> String {
        Self::ORDERED
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Applies this severity's fixed color to `text`.
    ///
    /// `Fatal` is the one background style (red background); every other
    /// level is a plain foreground color. The returned [`ColoredString`]
    /// carries its own trailing reset, so subsequent terminal output is
    /// unaffected.
    #[must_use]
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            LogLevel::Trace => text.cyan(),
            LogLevel::Debug => text.blue(),
            LogLevel::Info => text.green(),
            LogLevel::Warn => text.yellow(),
            LogLevel::Error => text.red(),
            LogLevel::Fatal => text.on_red(),
            LogLevel::Off => text.black(),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
