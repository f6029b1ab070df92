//! Answer payload shapes consumed by the downstream submission API.

use serde::{Deserialize, Serialize};

/// Fixed provenance tag attached to every generated answer.
pub const ANSWER_SOURCE: &str = "customer";

/// Sentinel produced by multi-value codecs for an empty cell. Payload
/// construction normalizes it back to the empty string.
pub const EMPTY_MULTI: &str = "[]";

/// One answered field within a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub field_name: String,
    pub field_value: String,
    pub source: String,
}

impl AnswerEntry {
    /// Builds a customer-sourced answer entry.
    pub fn customer(field_name: impl Into<String>, field_value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_value: field_value.into(),
            source: ANSWER_SOURCE.to_string(),
        }
    }
}

/// The JSON object submitted to answer one case's fields in one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub case_id: String,
    pub is_question_mode: bool,
    pub answers: Vec<AnswerEntry>,
}

impl AnswerPayload {
    /// Creates an empty answer-mode payload for a case.
    pub fn new(case_id: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            is_question_mode: false,
            answers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_in_answer_mode() {
        let mut payload = AnswerPayload::new("1001");
        payload.answers.push(AnswerEntry::customer("name", "Alice"));
        let json = serde_json::to_string(&payload).expect("serialize payload");
        assert_eq!(
            json,
            "{\"case_id\":\"1001\",\"is_question_mode\":false,\
             \"answers\":[{\"field_name\":\"name\",\"field_value\":\"Alice\",\
             \"source\":\"customer\"}]}"
        );
    }
}
