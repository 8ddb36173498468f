//! Transport failure taxonomy for gateway calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A failed gateway call.
///
/// Every operation makes exactly one attempt; the caller decides whether the
/// failure becomes a rendered error outcome (submission) or a region
/// placeholder (panel loads).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Unreachable(String),
    /// The backend answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Gateway calls are only meaningful in the browser.
    #[error("not available on server")]
    Unavailable,
}
