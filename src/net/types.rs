//! Wire DTOs for the triage backend's JSON surface.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads field-for-field so serde
//! round-trips stay lossless and panel code can remain schema-driven. Fields
//! the backend may omit are `Option` or `#[serde(default)]` so a sparse
//! response degrades to an empty-state render instead of a decode error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Routing outcome: the agent generated and sent a reply.
pub const ROUTED_AUTOMATED_RESPONSE: &str = "automated_response";
/// Routing outcome: escalated to the human queue.
pub const ROUTED_HUMAN_QUEUE: &str = "human_queue";
/// Routing outcome: the canned fallback reply was sent.
pub const ROUTED_DEFAULT_RESPONSE: &str = "default_response";
/// Routing outcome: processing failed.
pub const ROUTED_ERROR: &str = "error";

/// An inbound email as captured from the operator form. Immutable once sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    pub sender_email: String,
    pub subject: String,
    pub body: String,
}

/// A reply generated by the agent, rendered read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub to_email: String,
    pub subject: String,
    pub body: String,
    /// ISO-8601 instant; reformatted to viewer-local time at render.
    pub timestamp: String,
}

/// One step of the agent's internal pipeline.
///
/// The backend emits steps in execution order; that order is display order
/// and is never re-sorted client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Pipeline node identifier, e.g. `"fetch_user_orders"`.
    pub node: String,
    pub timestamp: String,
    pub duration_ms: Option<f64>,
    pub input_summary: Option<String>,
    pub output_summary: Option<String>,
}

/// Outcome of one email submission.
///
/// `routed_to` stays a plain string rather than an enum so routing outcomes
/// this client does not know about still deserialize and render verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub success: bool,
    pub response_email: Option<Email>,
    pub routed_to: String,
    pub escalation_reason: Option<String>,
    #[serde(default)]
    pub trace: Vec<TraceStep>,
    pub error: Option<String>,
}

/// An escalation awaiting a human. Created server-side; the client only ever
/// flips `resolved` false→true via the resolve operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: String,
    pub email_input: EmailInput,
    pub reason: String,
    pub timestamp: String,
    #[serde(default)]
    pub resolved: bool,
}

/// Read-only reference user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// Read-only order record, filterable by user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub user_id: String,
    pub product_name: String,
    /// Backend status value, e.g. `"out_for_delivery"`; humanized at render.
    pub status: String,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<String>,
    #[serde(default)]
    pub order_date: String,
    pub total_amount: f64,
}

/// Read-only log entry for a previously sent reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub to_email: String,
    pub subject: String,
    pub body: String,
    pub timestamp: String,
}

/// Acknowledgment for a resolve call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResolveAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// `GET /api/email/sent` envelope.
#[derive(Debug, Deserialize)]
pub struct SentEmailsEnvelope {
    #[serde(default)]
    pub emails: Vec<SentEmail>,
}

/// `GET /api/data/users` envelope.
#[derive(Debug, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub users: Vec<User>,
}

/// `GET /api/data/orders` envelope.
#[derive(Debug, Deserialize)]
pub struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// `GET /api/queue` envelope.
#[derive(Debug, Deserialize)]
pub struct QueueEnvelope {
    #[serde(default)]
    pub queue: Vec<QueueItem>,
}

/// `GET /api/graph/definition` envelope. The definition string is handed to
/// the external diagram renderer untouched.
#[derive(Debug, Deserialize)]
pub struct GraphDefinitionEnvelope {
    pub mermaid: String,
    #[serde(default)]
    pub description: String,
}
