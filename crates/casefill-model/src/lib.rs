pub mod answer;
pub mod error;
pub mod options;
pub mod schema;
pub mod submit;

pub use answer::{ANSWER_SOURCE, AnswerEntry, AnswerPayload, EMPTY_MULTI};
pub use error::{CasefillError, Result};
pub use options::{DEFAULT_ASSET_DIR, PipelineOptions, parse_utc_offset};
pub use schema::{CASE_ID, ColumnDescriptor, DataType, HEADER_DELIMITER, MULTI_TOKEN};
pub use submit::{SubmitOutcome, SubmitSummary, Submitter, submit_payloads};
