//! Asset embedding for file-typed cells.
//!
//! File cells reference bare filenames under a fixed asset directory. The
//! whole file is read into memory and embedded as a base64 data URI; form
//! attachments are small by contract, so no streaming is done.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use casefill_model::PipelineOptions;

use crate::warning::CodecFailure;

/// File-type labels carried in the data-URI header, keyed by extension.
const EXTENSION_TYPES: &[(&str, &str)] = &[
    ("jpg", "jpeg"),
    ("jpeg", "jpeg"),
    ("png", "png"),
    ("pdf", "pdf"),
];

/// Maps a filename extension to its data-URI type label.
pub fn file_type_label(filename: &str) -> Option<&'static str> {
    let extension = Path::new(filename).extension()?.to_str()?;
    let extension = extension.to_ascii_lowercase();
    EXTENSION_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, label)| *label)
}

/// Encodes one referenced asset file as a `data:@file/<type>;base64,...` URI.
///
/// Both failure modes are soft: an unsupported extension or unreadable file
/// yields an empty string plus a [`CodecFailure`] describing the cell.
pub fn encode_asset(filename: &str, options: &PipelineOptions) -> Result<String, CodecFailure> {
    let Some(label) = file_type_label(filename) else {
        return Err(CodecFailure::new(format!(
            "unsupported file type for `{filename}`"
        )));
    };
    let path = options.asset_path(filename);
    let bytes = fs::read(&path)
        .map_err(|_| CodecFailure::new(format!("file not found: {}", path.display())))?;
    Ok(format!(
        "data:@file/{label};base64,{}",
        STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions() {
        assert_eq!(file_type_label("scan.jpg"), Some("jpeg"));
        assert_eq!(file_type_label("scan.JPEG"), Some("jpeg"));
        assert_eq!(file_type_label("chart.png"), Some("png"));
        assert_eq!(file_type_label("contract.pdf"), Some("pdf"));
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert_eq!(file_type_label("notes.txt"), None);
        assert_eq!(file_type_label("no_extension"), None);
    }

    #[test]
    fn missing_file_is_a_soft_failure() {
        let options = PipelineOptions::default().with_asset_dir("/nonexistent/assets");
        let failure = encode_asset("scan.png", &options).expect_err("missing file");
        assert!(failure.reason.contains("not found"));
    }
}
