//! Email submission workflow state.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::{ProcessResult, ROUTED_ERROR};

/// Submit-button lifecycle plus the last rendered outcome.
///
/// One network call per submission; a second submit while `submitting` is
/// prevented by the disabled control, not by cancellation.
#[derive(Clone, Debug, Default)]
pub struct SubmissionState {
    pub submitting: bool,
    pub result: Option<ProcessResult>,
}

impl SubmissionState {
    /// A `ProcessResult`-shaped value for a transport failure, rendered
    /// through the same outcome path as a backend-reported error.
    #[must_use]
    pub fn failure_result(message: &str) -> ProcessResult {
        ProcessResult {
            success: false,
            response_email: None,
            routed_to: ROUTED_ERROR.to_owned(),
            escalation_reason: None,
            trace: Vec::new(),
            error: Some(message.to_owned()),
        }
    }
}
