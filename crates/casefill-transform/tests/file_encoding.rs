use std::fs;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tempfile::TempDir;

use casefill_model::{ColumnDescriptor, PipelineOptions};
use casefill_transform::{encode_asset, encode_cell};

fn asset_dir_with(files: &[(&str, &[u8])]) -> TempDir {
    let dir = TempDir::new().expect("create asset dir");
    for (name, bytes) in files {
        fs::write(dir.path().join(name), bytes).expect("write asset");
    }
    dir
}

#[test]
fn encodes_asset_as_data_uri() {
    let dir = asset_dir_with(&[("scan.png", b"\x89PNG\r\n")]);
    let options = PipelineOptions::default().with_asset_dir(dir.path());
    let uri = encode_asset("scan.png", &options).expect("encode");
    let expected = format!("data:@file/png;base64,{}", STANDARD.encode(b"\x89PNG\r\n"));
    assert_eq!(uri, expected);
}

#[test]
fn unsupported_extension_is_soft() {
    let dir = asset_dir_with(&[("notes.txt", b"hello")]);
    let options = PipelineOptions::default().with_asset_dir(dir.path());
    let failure = encode_asset("notes.txt", &options).expect_err("unsupported");
    assert!(failure.reason.contains("unsupported file type"));
}

#[test]
fn multi_file_cell_embeds_each_filename() {
    let dir = asset_dir_with(&[("a.jpg", b"aa"), ("b.pdf", b"bb")]);
    let options = PipelineOptions::default().with_asset_dir(dir.path());
    let descriptor = ColumnDescriptor::parse("attachments||file||MULTI").expect("parse");
    let (value, failures) = encode_cell(&descriptor, "a.jpg\\b.pdf", &options);
    assert!(failures.is_empty());
    let expected = format!(
        "[\"data:@file/jpeg;base64,{}\", \"data:@file/pdf;base64,{}\"]",
        STANDARD.encode(b"aa"),
        STANDARD.encode(b"bb")
    );
    assert_eq!(value, expected);
}

#[test]
fn single_file_cell_missing_file_degrades_to_empty() {
    let dir = asset_dir_with(&[]);
    let options = PipelineOptions::default().with_asset_dir(dir.path());
    let descriptor = ColumnDescriptor::parse("receipt||file").expect("parse");
    let (value, failures) = encode_cell(&descriptor, "missing.pdf", &options);
    assert_eq!(value, "");
    assert_eq!(failures.len(), 1);
    assert!(failures[0].reason.contains("not found"));
}
