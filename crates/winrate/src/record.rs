//! Parsing of a single match line
//!
//! A data line holds whitespace-separated fields:
//!
//! ```text
//! iteration map ai1 ai2 time winner crashed timedout
//! ```
//!
//! Only the winner field is inspected.

use thiserror::Error;

/// Zero-based position of the winner field on a data line
pub const WINNER_FIELD: usize = 5;

/// Winner value recorded for a drawn match
pub const DRAW: i32 = -1;

/// Why a data line could not yield a winner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("blank line")]
    Blank,

    #[error("expected at least {} fields, found {found}", WINNER_FIELD + 1)]
    MissingField { found: usize },

    #[error("winner field {0:?} is not an integer")]
    InvalidWinner(String),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Extract the winner field from a data line.
pub fn parse_winner(line: &str) -> Result<i32, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    match fields.get(WINNER_FIELD) {
        Some(field) => field
            .parse()
            .map_err(|_| RecordError::InvalidWinner(field.to_string())),
        None if fields.is_empty() => Err(RecordError::Blank),
        None => Err(RecordError::MissingField {
            found: fields.len(),
        }),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
