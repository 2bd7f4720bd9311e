/// Core data types for the fingerprint grouping tool.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O, only types and their error formatting.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Longest fingerprint accepted by default, in characters.
pub const DEFAULT_MAX_FINGERPRINT_LEN: usize = 512;

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// One accepted input line, split into its grouping key and its name.
///
/// The fingerprint is never empty and never contains a space or newline.
/// The name is never empty; internal and trailing spaces are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fingerprint: String,
    pub name: String,
}

/// An input line the parser refused, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub line_number: usize,
    pub error: ParseError,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Reasons a line cannot be turned into a `Record`.
///
/// None of these are fatal: the line is reported and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParseError {
    /// The line starts with a space, so there is no fingerprint.
    LeadingSpace,
    /// The line ended before any space separator was found.
    MissingName,
    /// The fingerprint is longer than the configured maximum.
    FingerprintTooLong { len: usize, max: usize },
    /// Only spaces follow the fingerprint.
    EmptyName,
    /// The line is not valid UTF-8.
    InvalidUtf8,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::LeadingSpace => write!(f, "line starts with a space"),
            ParseError::MissingName => {
                write!(f, "only one field present (no name after the fingerprint)")
            }
            ParseError::FingerprintTooLong { len, max } => {
                write!(f, "fingerprint is {} characters, exceeds {} characters", len, max)
            }
            ParseError::EmptyName => write!(f, "name field is empty"),
            ParseError::InvalidUtf8 => write!(f, "line is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}
