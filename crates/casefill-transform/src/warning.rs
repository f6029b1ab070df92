//! Soft-failure reporting for codec application.

use std::fmt;

/// A recoverable per-cell encoding failure, before it is tied to a table
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecFailure {
    pub reason: String,
}

impl CodecFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A soft failure located at a table cell. Never fatal: the offending cell
/// degrades to an empty value and processing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecWarning {
    /// Bare field name of the column.
    pub column: String,
    /// Zero-based data row index (header row excluded).
    pub row: usize,
    pub reason: String,
}

impl CodecWarning {
    pub fn located(failure: CodecFailure, column: &str, row: usize) -> Self {
        Self {
            column: column.to_string(),
            row,
            reason: failure.reason,
        }
    }
}

impl fmt::Display for CodecWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (row {}): {}", self.column, self.row + 1, self.reason)
    }
}
