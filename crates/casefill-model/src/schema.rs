//! Column schema derived from compound CSV headers.
//!
//! Source tables encode a per-field type schema in the header text:
//! `field_name(||data_type)?(||MULTI)?`. Each header is decoded once into a
//! [`ColumnDescriptor`] at table-load time; descriptors are immutable after
//! that point.

use serde::{Deserialize, Serialize};

use crate::error::{CasefillError, Result};

/// Reserved column name. The `case_id` column is datatype-less and flows
/// through every pipeline stage unchanged.
pub const CASE_ID: &str = "case_id";

/// Delimiter between header segments.
pub const HEADER_DELIMITER: &str = "||";

/// Header segment marking a multi-valued field.
pub const MULTI_TOKEN: &str = "MULTI";

/// Field datatype carried in the second header segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Date,
    DateTime,
    Number,
    #[default]
    Text,
    File,
}

impl DataType {
    /// Decodes a datatype token. Unrecognized tokens are treated as opaque
    /// text with no special encoding.
    pub fn from_token(token: &str) -> Self {
        match token {
            "date" => Self::Date,
            "date_time" => Self::DateTime,
            "number" => Self::Number,
            "text" => Self::Text,
            "file" => Self::File,
            _ => Self::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DateTime => "date_time",
            Self::Number => "number",
            Self::Text => "text",
            Self::File => "file",
        }
    }
}

/// Decoded form of one compound column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Bare field name (segment 0 of the header).
    pub field_name: String,
    pub data_type: DataType,
    pub is_multi: bool,
}

impl ColumnDescriptor {
    /// Parses a compound header into a descriptor.
    ///
    /// Segment 0 is the field name, segment 1 (if present) the datatype
    /// token, and any later segment equal to `MULTI` marks the field
    /// multi-valued. A header that is already a bare field name parses as an
    /// untyped text field, so re-parsing a renamed header is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`CasefillError::Schema`] when the field name is empty. This
    /// is the only malformed-input condition that aborts a run.
    pub fn parse(header: &str) -> Result<Self> {
        let mut segments = header.split(HEADER_DELIMITER);
        let field_name = segments.next().unwrap_or_default().trim();
        if field_name.is_empty() {
            return Err(CasefillError::schema(header, "empty field name"));
        }
        if field_name == CASE_ID {
            // Reserved column: untyped regardless of trailing segments.
            return Ok(Self {
                field_name: CASE_ID.to_string(),
                data_type: DataType::Text,
                is_multi: false,
            });
        }
        let data_type = segments
            .next()
            .map(|token| DataType::from_token(token.trim()))
            .unwrap_or_default();
        let is_multi = segments.any(|segment| segment.trim() == MULTI_TOKEN);
        Ok(Self {
            field_name: field_name.to_string(),
            data_type,
            is_multi,
        })
    }

    /// Returns true for the reserved `case_id` column, which skips codec
    /// application entirely.
    pub fn is_case_id(&self) -> bool {
        self.field_name == CASE_ID
    }
}
