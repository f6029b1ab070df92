use thiserror::Error;

/// Fatal pipeline errors.
///
/// Soft per-cell failures (unparseable dates, missing asset files) are not
/// errors; they degrade to empty values and surface as warnings in the
/// transform report.
#[derive(Debug, Error)]
pub enum CasefillError {
    /// Malformed column header detected at table-load time. Aborts the run
    /// before any column is transformed or any output file is written.
    #[error("schema error in header `{header}`: {reason}")]
    Schema { header: String, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

impl CasefillError {
    pub fn schema(header: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            header: header.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CasefillError>;
