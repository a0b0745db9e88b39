//! Session identity and per-session request gating.

use std::fmt;
use std::time::Duration;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::config::ThrottleConfig;
use crate::throttle::{RequestRateLimiter, ThrottleDecision};

/// Identifies one logical client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a fresh session identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gates outbound requests per session.
///
/// Owns one [`RequestRateLimiter`] per session, created on first use with
/// the configured parameters and discarded with
/// [`end_session`](SessionGate::end_session). The gate can be shared
/// across threads: each limiter sits behind its own lock so the
/// prune-and-append check is atomic per session, without a single global
/// lock across all sessions.
pub struct SessionGate<C: Clock + Clone = SystemClock> {
    /// Throttle parameters applied to every session.
    config: ThrottleConfig,
    /// Per-session limiters.
    limiters: DashMap<SessionId, Mutex<RequestRateLimiter<C>>>,
    /// Time source handed to each limiter.
    clock: C,
}

impl SessionGate<SystemClock> {
    /// Create a gate on the system clock.
    pub fn new(config: ThrottleConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock + Clone> SessionGate<C> {
    /// Create a gate with an explicit time source.
    pub fn with_clock(config: ThrottleConfig, clock: C) -> Self {
        Self {
            config,
            limiters: DashMap::new(),
            clock,
        }
    }

    /// Decide whether the session's request may proceed.
    ///
    /// Accepts and records the request when the session's window has a
    /// free slot; otherwise denies and reports how long the caller must
    /// wait.
    pub fn check(&self, session: SessionId) -> ThrottleDecision {
        let entry = self.limiters.entry(session).or_insert_with(|| {
            debug!(
                session = %session,
                limit = self.config.max_requests,
                window_ms = self.config.window_ms,
                "Creating session limiter"
            );
            Mutex::new(RequestRateLimiter::with_clock(
                self.config.max_requests,
                self.config.window(),
                self.clock.clone(),
            ))
        });

        let mut limiter = entry.lock();
        let allowed = limiter.try_acquire();
        let remaining = limiter.max_requests().saturating_sub(limiter.current_count());
        let retry_after = if allowed {
            None
        } else {
            Some(limiter.time_until_next_slot())
        };

        trace!(session = %session, allowed, remaining, "Session gate check");
        if !allowed {
            debug!(
                session = %session,
                retry_after_ms = retry_after.unwrap_or(Duration::ZERO).as_millis() as u64,
                "Request throttled"
            );
        }

        ThrottleDecision {
            allowed,
            limit: limiter.max_requests(),
            remaining,
            retry_after,
        }
    }

    /// Minimum wait before the session could next be allowed, without
    /// consuming a slot.
    ///
    /// Zero for sessions the gate has never seen.
    pub fn wait_hint(&self, session: SessionId) -> Duration {
        self.limiters
            .get(&session)
            .map(|entry| entry.lock().time_until_next_slot())
            .unwrap_or(Duration::ZERO)
    }

    /// Discard the session's limiter state.
    pub fn end_session(&self, session: SessionId) {
        if self.limiters.remove(&session).is_some() {
            debug!(session = %session, "Session ended");
        }
    }

    /// Number of sessions with live limiter state.
    pub fn session_count(&self) -> usize {
        self.limiters.len()
    }
}
