/// Represents a single log call's payload.
///
/// A record is built fresh for each call, handed to one of the
/// [`Logger`](crate::Logger) methods, and never retained. Only the four
/// fields below exist; there is no place for extra data to ride along into
/// the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// What happened (e.g. `"connection refused"`). Interpolated verbatim.
    pub action: String,
    /// Where it happened (e.g. a module path or endpoint). Interpolated verbatim.
    pub location: String,
    /// Optional status code. `None` omits the `Status Code:` line entirely.
    pub status: Option<i64>,
    /// Free-form notes, rendered one per line after the status line.
    pub notes: Vec<String>,
}

impl LogRecord {
    /// Creates a record with no status and no notes.
    #[must_use]
    pub fn new(action: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            location: location.into(),
            status: None,
            notes: Vec::new(),
        }
    }

    /// Attaches a status code.
    #[must_use]
    pub fn with_status(mut self, status: i64) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the notes list.
    #[must_use]
    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes = notes.into_iter().map(Into::into).collect();
        self
    }

    /// Renders the record into the uncolored message body.
    ///
    /// Layout, top to bottom:
    /// - `"{action} at {location}"`
    /// - `"Status Code: {status}"` only when a status is present
    /// - the notes, one per line; an empty notes list leaves one empty line
    pub(crate) fn render(&self) -> String {
        let mut out = format!("{} at {}", self.action, self.location);
        if let Some(code) = self.status {
            out.push_str(&format!("\nStatus Code: {code}"));
        }
        out.push('\n');
        out.push_str(&self.notes.join("\n"));
        out
    }
}
