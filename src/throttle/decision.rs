//! Throttle decision reported to the embedding application.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a gate check.
///
/// Denial is an ordinary outcome, not an error. The embedding UI turns it
/// into a "too many requests, wait N seconds" message using
/// [`retry_after_secs`](ThrottleDecision::retry_after_secs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleDecision {
    /// Whether the request may proceed.
    pub allowed: bool,
    /// The configured request limit.
    pub limit: u32,
    /// Slots left in the trailing window after this decision.
    pub remaining: u32,
    /// On denial, the minimum wait before a slot opens.
    pub retry_after: Option<Duration>,
}

impl ThrottleDecision {
    /// The wait in whole seconds, rounded up, for user-facing messages.
    pub fn retry_after_secs(&self) -> Option<u64> {
        self.retry_after
            .map(|wait| wait.as_millis().div_ceil(1000) as u64)
    }
}
