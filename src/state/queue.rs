//! Human-escalation queue state.
//!
//! The displayed resolved-state always reflects the last successful fetch:
//! resolving never mutates an item locally, it triggers a reload instead.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use crate::net::error::TransportError;
use crate::net::types::QueueItem;

#[derive(Clone, Debug, Default)]
pub struct QueueState {
    pub items: Vec<QueueItem>,
    pub loading: bool,
    pub failed: bool,
    /// Item id with a resolve call in flight; its button is disabled.
    pub resolving: Option<String>,
    token: u64,
}

impl QueueState {
    /// Issues a new reload token, invalidating in-flight fetches.
    pub fn next_token(&mut self) -> u64 {
        self.token += 1;
        self.token
    }

    /// Applies a reload result when `token` is still the latest issued.
    /// Returns whether the result was applied; stale completions are dropped.
    pub fn apply(&mut self, token: u64, result: Result<Vec<QueueItem>, TransportError>) -> bool {
        if token != self.token {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.failed = false;
            }
            Err(_) => self.failed = true,
        }
        true
    }
}
