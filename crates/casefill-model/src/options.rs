//! Construction-time configuration for the answer pipeline.
//!
//! All environment-dependent inputs (asset directory, time zone) are explicit
//! values passed in at construction, never derived from ambient process
//! state. Date-to-epoch conversion in particular uses a fixed offset so runs
//! are reproducible across machines.

use std::path::{Path, PathBuf};

use chrono::{FixedOffset, Offset, Utc};

use crate::error::{CasefillError, Result};

/// Default asset directory, relative to the working directory.
pub const DEFAULT_ASSET_DIR: &str = "answers/file";

/// Options controlling answer generation.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directory that file-typed cells resolve bare filenames against.
    pub asset_dir: PathBuf,
    /// Fixed offset applied when interpreting source dates. Defaults to UTC.
    pub utc_offset: FixedOffset,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            utc_offset: Utc.fix(),
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Resolves a bare asset filename against the configured directory.
    pub fn asset_path(&self, filename: &str) -> PathBuf {
        self.asset_dir.join(Path::new(filename))
    }
}

/// Parses a fixed offset of the form `+HH:MM` or `-HH:MM` (`Z` accepted for
/// UTC).
///
/// # Errors
///
/// Returns [`CasefillError::Message`] for malformed or out-of-range offsets.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "Z" {
        return Ok(Utc.fix());
    }
    let (sign, rest) = match trimmed.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => {
            return Err(CasefillError::Message(format!(
                "invalid utc offset `{trimmed}`: expected +HH:MM or -HH:MM"
            )));
        }
    };
    let (hours_str, minutes_str) = rest.split_once(':').ok_or_else(|| {
        CasefillError::Message(format!(
            "invalid utc offset `{trimmed}`: expected +HH:MM or -HH:MM"
        ))
    })?;
    let hours: i32 = hours_str
        .parse()
        .map_err(|_| CasefillError::Message(format!("invalid utc offset hours `{hours_str}`")))?;
    let minutes: i32 = minutes_str.parse().map_err(|_| {
        CasefillError::Message(format!("invalid utc offset minutes `{minutes_str}`"))
    })?;
    if !(0..=14).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(CasefillError::Message(format!(
            "utc offset `{trimmed}` out of range"
        )));
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| CasefillError::Message(format!("utc offset `{trimmed}` out of range")))
}
