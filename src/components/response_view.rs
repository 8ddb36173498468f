//! Outcome panel for the most recent submission.

#[cfg(test)]
#[path = "response_view_test.rs"]
mod response_view_test;

use leptos::prelude::*;

use crate::net::types::{
    Email, ProcessResult, ROUTED_AUTOMATED_RESPONSE, ROUTED_DEFAULT_RESPONSE, ROUTED_HUMAN_QUEUE,
};
use crate::state::submission::SubmissionState;
use crate::util::time::format_local;

/// How a `ProcessResult` renders, decided ahead of the view.
#[derive(Clone, Debug, PartialEq)]
enum Outcome {
    /// Alert card with the error message.
    Error(String),
    /// Badge plus either the generated reply or the no-reply fallback.
    Routed {
        badge_class: &'static str,
        badge_text: String,
        email: Option<Email>,
        reason: Option<String>,
    },
}

fn outcome(result: &ProcessResult) -> Outcome {
    if !result.success && result.response_email.is_none() {
        return Outcome::Error(
            result
                .error
                .clone()
                .unwrap_or_else(|| "Unknown error occurred".to_owned()),
        );
    }

    let (badge_class, badge_text) = match result.routed_to.as_str() {
        ROUTED_AUTOMATED_RESPONSE => ("automated", "Automated Response".to_owned()),
        ROUTED_HUMAN_QUEUE => ("human", "Routed to Human".to_owned()),
        ROUTED_DEFAULT_RESPONSE => ("default", "Default Response".to_owned()),
        // Unknown outcomes render their wire value verbatim.
        other => ("default", other.to_owned()),
    };

    // Only the two reply-generating outcomes ever show an email body;
    // escalations and unknown outcomes fall back to the reason line.
    let email = match result.routed_to.as_str() {
        ROUTED_AUTOMATED_RESPONSE | ROUTED_DEFAULT_RESPONSE => result.response_email.clone(),
        _ => None,
    };

    Outcome::Routed {
        badge_class,
        badge_text,
        email,
        reason: result.escalation_reason.clone(),
    }
}

/// Rendered outcome for the most recent submission, or a prompt to submit.
#[component]
pub fn ResponseView() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();

    view! {
        <div class="response-view">
            <h2>"Agent Response"</h2>
            {move || match submission.get().result {
                None => view! {
                    <p class="placeholder">"Submit an email to see the agent's decision."</p>
                }
                .into_any(),
                Some(result) => outcome_view(outcome(&result)),
            }}
        </div>
    }
}

fn outcome_view(outcome: Outcome) -> AnyView {
    match outcome {
        Outcome::Error(message) => view! {
            <div class="response-card response-card--error">
                <div class="response-card__header">
                    <p>
                        <strong>"Error: "</strong>
                        {message}
                    </p>
                </div>
            </div>
        }
        .into_any(),
        Outcome::Routed {
            badge_class,
            badge_text,
            email,
            reason,
        } => {
            let badge = view! {
                <p>
                    <strong>"Status: "</strong>
                    <span class=format!("routed-badge routed-badge--{badge_class}")>{badge_text}</span>
                </p>
            };
            match email {
                Some(email) => view! {
                    <div class="response-card">
                        <div class="response-card__header">
                            {badge}
                            <p>
                                <strong>"To: "</strong>
                                {email.to_email}
                            </p>
                            <p>
                                <strong>"Subject: "</strong>
                                {email.subject}
                            </p>
                            <p>
                                <strong>"Timestamp: "</strong>
                                {format_local(&email.timestamp)}
                            </p>
                        </div>
                        <div class="response-card__body">{email.body}</div>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="response-card">
                        <div class="response-card__header">{badge}</div>
                        <div class="response-card__body">
                            {match reason {
                                Some(reason) => view! {
                                    <p>
                                        <strong>"Reason: "</strong>
                                        {reason}
                                    </p>
                                }
                                .into_any(),
                                None => view! { <em>"No email response generated."</em> }.into_any(),
                            }}
                        </div>
                    </div>
                }
                .into_any(),
            }
        }
    }
}
