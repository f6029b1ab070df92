//! End-to-end pipeline tests over real files on disk.

use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tempfile::TempDir;

use casefill_cli::pipeline::run_answer_pipeline;
use casefill_model::PipelineOptions;

fn write_file(dir: &Path, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write test file");
    path
}

#[test]
fn generates_answer_csv_and_payload_json() {
    let workdir = TempDir::new().expect("temp dir");
    let assets = TempDir::new().expect("asset dir");
    let photo_bytes = b"\x89PNG\r\n\x1a\nstub";
    write_file(assets.path(), "pic.png", photo_bytes);

    let csv_path = write_file(
        workdir.path(),
        "question.csv",
        b"case_id,name||text,dob||date,tags||text||MULTI,photo||file\n\
          1001,Alice,15-03-1990,\"red,blue\",pic.png\n\
          ,Ghost,01-01-2024,,\n",
    );

    let options = PipelineOptions::default().with_asset_dir(assets.path());
    let result =
        run_answer_pipeline(&csv_path, &options, None, false).expect("pipeline succeeds");

    assert_eq!(result.row_count, 2);
    assert_eq!(result.column_count, 5);
    assert_eq!(result.payload_count, 1);
    assert!(result.warnings.is_empty());

    let answer_csv = result.answer_csv.expect("answer csv written");
    assert_eq!(answer_csv, workdir.path().join("answer.csv"));
    let csv_text = fs::read_to_string(&answer_csv).expect("read answer csv");
    let data_uri = format!("data:@file/png;base64,{}", STANDARD.encode(photo_bytes));
    let expected = format!(
        "\"case_id\",\"name\",\"dob\",\"tags\",\"photo\"\n\
         1001,\"Alice\",637459200,\"[\\\"red\\\", \\\"blue\\\"]\",\"{data_uri}\"\n\
         \"\",\"Ghost\",1704067200,\"[]\",\"\"\n"
    );
    assert_eq!(csv_text, expected);

    let payload_json = result.payload_json.expect("payload json written");
    assert_eq!(payload_json, workdir.path().join("answer.json"));
    let payloads: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&payload_json).expect("read json"))
            .expect("valid json");
    let payloads = payloads.as_array().expect("array of payloads");
    assert_eq!(payloads.len(), 1);
    let payload = &payloads[0];
    assert_eq!(payload["case_id"], "1001");
    assert_eq!(payload["is_question_mode"], false);
    let answers = payload["answers"].as_array().expect("answers array");
    assert_eq!(answers.len(), 4);
    assert_eq!(answers[0]["field_name"], "name");
    assert_eq!(answers[0]["field_value"], "Alice");
    assert_eq!(answers[0]["source"], "customer");
    assert_eq!(answers[1]["field_name"], "dob");
    assert_eq!(answers[1]["field_value"], "637459200");
    assert_eq!(answers[2]["field_value"], "[\"red\", \"blue\"]");
    assert_eq!(answers[3]["field_value"], serde_json::json!(data_uri));
}

#[test]
fn dry_run_writes_nothing() {
    let workdir = TempDir::new().expect("temp dir");
    let csv_path = write_file(
        workdir.path(),
        "question.csv",
        b"case_id,name||text\n1001,Alice\n",
    );

    let options = PipelineOptions::default();
    let result = run_answer_pipeline(&csv_path, &options, None, true).expect("dry run succeeds");

    assert!(result.answer_csv.is_none());
    assert!(result.payload_json.is_none());
    assert_eq!(result.payload_count, 1);
    assert!(!workdir.path().join("answer.csv").exists());
    assert!(!workdir.path().join("answer.json").exists());
}

#[test]
fn schema_failure_aborts_before_output() {
    let workdir = TempDir::new().expect("temp dir");
    let csv_path = write_file(
        workdir.path(),
        "question.csv",
        b"case_id,||date\n1001,15-03-1990\n",
    );

    let options = PipelineOptions::default();
    let error = run_answer_pipeline(&csv_path, &options, None, false)
        .expect_err("malformed header is fatal");
    assert!(format!("{error:#}").contains("schema"));
    assert!(!workdir.path().join("answer.csv").exists());
    assert!(!workdir.path().join("answer.json").exists());
}

#[test]
fn output_dir_redirects_generated_files() {
    let workdir = TempDir::new().expect("temp dir");
    let outdir = TempDir::new().expect("output dir");
    let csv_path = write_file(
        workdir.path(),
        "cases-question.csv",
        b"case_id,name||text\n1001,Alice\n",
    );

    let options = PipelineOptions::default();
    let result = run_answer_pipeline(&csv_path, &options, Some(outdir.path()), false)
        .expect("pipeline succeeds");

    assert_eq!(
        result.answer_csv.as_deref(),
        Some(outdir.path().join("cases-answer.csv").as_path())
    );
    assert!(outdir.path().join("cases-answer.csv").exists());
    assert!(outdir.path().join("cases-answer.json").exists());
    assert!(!workdir.path().join("cases-answer.csv").exists());
}
