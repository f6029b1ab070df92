pub mod csv_writer;
pub mod payload;

pub use csv_writer::{answer_csv_path, payload_json_path, write_answer_csv};
pub use payload::{build_payloads, write_payload_json};
