//! Errors raised while building a time sheet.

use thiserror::Error;

/// Input that cannot be turned into a time sheet.
///
/// Line numbers are one-based, matching what an editor shows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    /// A task line appeared before any day header.
    #[error("line {line_number}: task appears before any day header: {content}")]
    TaskBeforeDayHeader { line_number: usize, content: String },

    /// A numeric field is outside its range (strict mode only).
    #[error("line {line_number}: {field} {value} is out of range: {content}")]
    OutOfRange {
        line_number: usize,
        field: &'static str,
        value: u32,
        content: String,
    },
}

impl MalformedInputError {
    /// The one-based number of the offending line.
    pub const fn line_number(&self) -> usize {
        match self {
            Self::TaskBeforeDayHeader { line_number, .. }
            | Self::OutOfRange { line_number, .. } => *line_number,
        }
    }

    /// The offending line as it appeared in the input.
    pub fn content(&self) -> &str {
        match self {
            Self::TaskBeforeDayHeader { content, .. } | Self::OutOfRange { content, .. } => content,
        }
    }
}
