use serde::Serialize;
use thiserror::Error;

/// A non-fatal condition noticed while building an outline.
///
/// Parsing never fails; these are handed back next to the
/// [`ParseResult`](crate::ParseResult) so callers can decide what matters.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ParseWarning {
    /// The line held more than one `:`; everything after the key was dropped.
    #[error("line {line}: '{key}' has more than one ':', dropped body '{dropped}'")]
    ExtraDelimiters {
        line: usize,
        key: String,
        dropped: String,
    },

    /// A date element was re-keyed with something that is not a date.
    #[error("date element given non-date key '{key}'")]
    NonDateKey { key: String },

    /// The line was indented deeper than the configured limit.
    #[error("line {line}: indentation {indent} exceeds limit {limit}, clamped")]
    DepthClamped {
        line: usize,
        indent: usize,
        limit: usize,
    },
}
