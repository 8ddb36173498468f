use super::*;
use crate::net::types::ROUTED_ERROR;

fn email() -> Email {
    Email {
        to_email: "john.doe@email.com".to_owned(),
        subject: "Re: Where is my order?".to_owned(),
        body: "Your order ships tomorrow.".to_owned(),
        timestamp: "2025-06-03T14:41:05Z".to_owned(),
    }
}

fn result(routed_to: &str) -> ProcessResult {
    ProcessResult {
        success: true,
        response_email: None,
        routed_to: routed_to.to_owned(),
        escalation_reason: None,
        trace: Vec::new(),
        error: None,
    }
}

#[test]
fn failure_without_email_is_an_error_outcome() {
    let mut failed = result(ROUTED_ERROR);
    failed.success = false;
    failed.error = Some("agent unavailable".to_owned());
    assert_eq!(outcome(&failed), Outcome::Error("agent unavailable".to_owned()));
}

#[test]
fn failure_without_a_message_gets_the_fallback() {
    let mut failed = result(ROUTED_ERROR);
    failed.success = false;
    assert_eq!(outcome(&failed), Outcome::Error("Unknown error occurred".to_owned()));
}

#[test]
fn automated_response_shows_badge_and_email() {
    let mut processed = result(ROUTED_AUTOMATED_RESPONSE);
    processed.response_email = Some(email());
    match outcome(&processed) {
        Outcome::Routed {
            badge_text, email, ..
        } => {
            assert_eq!(badge_text, "Automated Response");
            assert!(email.is_some());
        }
        Outcome::Error(_) => panic!("expected a routed outcome"),
    }
}

#[test]
fn default_response_shows_badge_and_email() {
    let mut processed = result(ROUTED_DEFAULT_RESPONSE);
    processed.response_email = Some(email());
    match outcome(&processed) {
        Outcome::Routed {
            badge_text, email, ..
        } => {
            assert_eq!(badge_text, "Default Response");
            assert!(email.is_some());
        }
        Outcome::Error(_) => panic!("expected a routed outcome"),
    }
}

#[test]
fn human_queue_never_shows_an_email_body() {
    // Even when the backend happens to include a reply, the escalation
    // reason takes precedence display-wise.
    let mut escalated = result(ROUTED_HUMAN_QUEUE);
    escalated.response_email = Some(email());
    escalated.escalation_reason = Some("Unknown sender".to_owned());
    match outcome(&escalated) {
        Outcome::Routed {
            badge_text,
            email,
            reason,
            ..
        } => {
            assert_eq!(badge_text, "Routed to Human");
            assert!(email.is_none());
            assert_eq!(reason.as_deref(), Some("Unknown sender"));
        }
        Outcome::Error(_) => panic!("expected a routed outcome"),
    }
}

#[test]
fn unknown_outcome_renders_its_wire_value_verbatim() {
    let mut odd = result("quarantine");
    odd.response_email = Some(email());
    match outcome(&odd) {
        Outcome::Routed {
            badge_text, email, ..
        } => {
            assert_eq!(badge_text, "quarantine");
            assert!(email.is_none());
        }
        Outcome::Error(_) => panic!("expected a routed outcome"),
    }
}

#[test]
fn transport_failure_shape_renders_as_error() {
    use crate::state::submission::SubmissionState;
    let synthesized = SubmissionState::failure_result("request failed: connection refused");
    assert_eq!(
        outcome(&synthesized),
        Outcome::Error("request failed: connection refused".to_owned())
    );
}
