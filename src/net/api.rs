//! REST gateway for the triage backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `TransportError::Unavailable` since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! One attempt per call, no retries, no timeouts. The three transport failure
//! classes map onto `TransportError`; recovery is always an operator action
//! (resubmit, refresh), never automatic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::TransportError;
use super::types::{EmailInput, Order, ProcessResult, QueueItem, ResolveAck, SentEmail, User};

/// Default look-back window for order queries, in days.
pub const DEFAULT_ORDER_WINDOW_DAYS: u32 = 14;

#[cfg(any(test, feature = "hydrate"))]
fn orders_endpoint(user_id: Option<&str>, days: u32) -> String {
    match user_id {
        Some(id) => format!("/api/data/orders?days={days}&user_id={id}"),
        None => format!("/api/data/orders?days={days}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn resolve_endpoint(item_id: &str) -> String {
    format!("/api/queue/{item_id}/resolve")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, TransportError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| TransportError::Unreachable(e.to_string()))?;
    if !resp.ok() {
        return Err(TransportError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| TransportError::Malformed(e.to_string()))
}

/// Submit an inbound email for triage via `POST /api/email/process`.
///
/// # Errors
///
/// Returns a `TransportError` when the request cannot be sent, the backend
/// answers non-2xx, or the body fails to decode.
pub async fn submit_email(input: &EmailInput) -> Result<ProcessResult, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/email/process")
            .json(input)
            .map_err(|e| TransportError::Unreachable(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        if !resp.ok() {
            return Err(TransportError::Status(resp.status()));
        }
        resp.json::<ProcessResult>()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(TransportError::Unavailable)
    }
}

/// Fetch previously sent replies via `GET /api/email/sent`.
///
/// # Errors
///
/// Returns a `TransportError` on any transport failure.
pub async fn list_sent_emails() -> Result<Vec<SentEmail>, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::SentEmailsEnvelope = get_json("/api/email/sent").await?;
        Ok(envelope.emails)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(TransportError::Unavailable)
    }
}

/// Fetch all reference users via `GET /api/data/users`.
///
/// # Errors
///
/// Returns a `TransportError` on any transport failure.
pub async fn list_users() -> Result<Vec<User>, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::UsersEnvelope = get_json("/api/data/users").await?;
        Ok(envelope.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(TransportError::Unavailable)
    }
}

/// Fetch orders via `GET /api/data/orders`, optionally filtered to one user.
/// `None` means all users; `days` bounds the look-back window.
///
/// # Errors
///
/// Returns a `TransportError` on any transport failure.
pub async fn list_orders(user_id: Option<&str>, days: u32) -> Result<Vec<Order>, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::OrdersEnvelope = get_json(&orders_endpoint(user_id, days)).await?;
        Ok(envelope.orders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, days);
        Err(TransportError::Unavailable)
    }
}

/// Fetch the human-escalation queue via `GET /api/queue`.
///
/// # Errors
///
/// Returns a `TransportError` on any transport failure.
pub async fn list_queue() -> Result<Vec<QueueItem>, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::QueueEnvelope = get_json("/api/queue").await?;
        Ok(envelope.queue)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(TransportError::Unavailable)
    }
}

/// Mark a queue item resolved via `POST /api/queue/{id}/resolve`.
///
/// # Errors
///
/// Returns a `TransportError` when the request cannot be sent, the backend
/// answers non-2xx (including 404 for an unknown item), or the acknowledgment
/// fails to decode.
pub async fn resolve_queue_item(item_id: &str) -> Result<ResolveAck, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&resolve_endpoint(item_id))
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        if !resp.ok() {
            return Err(TransportError::Status(resp.status()));
        }
        resp.json::<ResolveAck>()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = item_id;
        Err(TransportError::Unavailable)
    }
}

/// Fetch the agent pipeline diagram definition via `GET /api/graph/definition`.
///
/// # Errors
///
/// Returns a `TransportError` on any transport failure.
pub async fn fetch_graph_definition() -> Result<String, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::GraphDefinitionEnvelope = get_json("/api/graph/definition").await?;
        Ok(envelope.mermaid)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(TransportError::Unavailable)
    }
}
