//! Boundary types for the downstream submission collaborator.
//!
//! The pipeline only produces payloads; transport, authentication, and retry
//! live behind [`Submitter`]. The core makes no assumption beyond the
//! status-code/body shape of a response.

use std::collections::BTreeMap;

use crate::answer::AnswerPayload;
use crate::error::Result;

/// Response surface of one submission attempt.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub status_code: u16,
    pub response_body: serde_json::Value,
}

/// Implemented by the out-of-process submission layer.
pub trait Submitter {
    fn submit(&self, payload: &AnswerPayload) -> Result<SubmitOutcome>;
}

/// Frequency of status codes across a submission batch.
#[derive(Debug, Clone, Default)]
pub struct SubmitSummary {
    pub status_counts: BTreeMap<u16, usize>,
    /// Transport-level failures (no status code obtained).
    pub failures: Vec<String>,
}

impl SubmitSummary {
    pub fn record(&mut self, status_code: u16) {
        *self.status_counts.entry(status_code).or_insert(0) += 1;
    }

    pub fn total(&self) -> usize {
        self.status_counts.values().sum::<usize>() + self.failures.len()
    }
}

/// Drives a submitter over a payload batch, tallying status codes.
///
/// Individual failures never abort the batch; they are recorded and the next
/// payload is attempted.
pub fn submit_payloads(submitter: &dyn Submitter, payloads: &[AnswerPayload]) -> SubmitSummary {
    let mut summary = SubmitSummary::default();
    for payload in payloads {
        match submitter.submit(payload) {
            Ok(outcome) => summary.record(outcome.status_code),
            Err(error) => summary
                .failures
                .push(format!("case {}: {error}", payload.case_id)),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CasefillError;

    struct FlakySubmitter;

    impl Submitter for FlakySubmitter {
        fn submit(&self, payload: &AnswerPayload) -> Result<SubmitOutcome> {
            if payload.case_id == "bad" {
                return Err(CasefillError::Message("connection reset".to_string()));
            }
            Ok(SubmitOutcome {
                status_code: 200,
                response_body: serde_json::json!({"code": "OK"}),
            })
        }
    }

    #[test]
    fn tallies_status_codes_and_failures() {
        let payloads = vec![
            AnswerPayload::new("1001"),
            AnswerPayload::new("bad"),
            AnswerPayload::new("1002"),
        ];
        let summary = submit_payloads(&FlakySubmitter, &payloads);
        assert_eq!(summary.status_counts.get(&200), Some(&2));
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.total(), 3);
    }
}
