//! Data-explorer state: reference tables and the user filter.
//!
//! DESIGN
//! ======
//! Orders and sent emails can be re-fetched independently (filter changes,
//! manual refresh) and there is no request cancellation, so each region
//! carries a monotonically increasing request token. A completed fetch is
//! applied only while its token is still the latest issued for that region;
//! rapid repeated actions can then never overwrite newer data with an older
//! response that happened to finish last.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::net::error::TransportError;
use crate::net::types::{Order, SentEmail, User};

/// Label for a user-filter option: `"name (email)"`.
#[must_use]
pub fn filter_option_label(user: &User) -> String {
    format!("{} ({})", user.name, user.email)
}

/// All three explorer regions plus the user-filter selection.
#[derive(Clone, Debug, Default)]
pub struct DataState {
    pub users: Vec<User>,
    pub users_failed: bool,
    pub orders: Vec<Order>,
    pub orders_failed: bool,
    pub sent_emails: Vec<SentEmail>,
    pub sent_failed: bool,
    /// Selected user filter; `None` shows all users' orders.
    pub user_filter: Option<String>,
    orders_token: u64,
    sent_token: u64,
}

impl DataState {
    /// Issues a new orders request token, invalidating in-flight fetches.
    pub fn next_orders_token(&mut self) -> u64 {
        self.orders_token += 1;
        self.orders_token
    }

    /// Applies an orders result when `token` is still the latest issued.
    /// Returns whether the result was applied; stale completions are dropped.
    pub fn apply_orders(&mut self, token: u64, result: Result<Vec<Order>, TransportError>) -> bool {
        if token != self.orders_token {
            return false;
        }
        match result {
            Ok(orders) => {
                self.orders = orders;
                self.orders_failed = false;
            }
            Err(_) => self.orders_failed = true,
        }
        true
    }

    /// Issues a new sent-emails request token, invalidating in-flight fetches.
    pub fn next_sent_token(&mut self) -> u64 {
        self.sent_token += 1;
        self.sent_token
    }

    /// Applies a sent-emails result when `token` is still the latest issued.
    pub fn apply_sent(&mut self, token: u64, result: Result<Vec<SentEmail>, TransportError>) -> bool {
        if token != self.sent_token {
            return false;
        }
        match result {
            Ok(emails) => {
                self.sent_emails = emails;
                self.sent_failed = false;
            }
            Err(_) => self.sent_failed = true,
        }
        true
    }
}
