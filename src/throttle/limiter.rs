//! Sliding-window request-rate limiter.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// A sliding-window rate limiter backed by a log of accepted-request
/// timestamps.
///
/// At any instant, the number of accepted requests inside the trailing
/// window never exceeds `max_requests` — for every trailing window of the
/// configured length, not just bucket-aligned ones. A fixed bucket would
/// admit up to twice the limit in a short span across a bucket boundary.
///
/// The limiter performs no internal synchronization; `try_acquire` takes
/// `&mut self`. One instance belongs to one logical session, and sharing
/// across threads is the owner's job (see [`SessionGate`]).
///
/// [`SessionGate`]: crate::session::SessionGate
pub struct RequestRateLimiter<C: Clock = SystemClock> {
    /// Maximum accepted requests inside the window.
    max_requests: u32,
    /// Length of the sliding window.
    window: Duration,
    /// Timestamps of accepted requests, oldest first.
    timestamps: VecDeque<Instant>,
    /// Time source.
    clock: C,
}

impl RequestRateLimiter<SystemClock> {
    /// Create a limiter on the system clock.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self::with_clock(max_requests, window, SystemClock)
    }
}

impl<C: Clock> RequestRateLimiter<C> {
    /// Create a limiter with an explicit time source.
    pub fn with_clock(max_requests: u32, window: Duration, clock: C) -> Self {
        Self {
            max_requests,
            window,
            timestamps: VecDeque::new(),
            clock,
        }
    }

    /// Decide whether a request may proceed right now.
    ///
    /// Prunes expired entries, then accepts and records the request if the
    /// window has a free slot. Rejected attempts are never recorded, so a
    /// denied caller does not push its own retry further out.
    pub fn try_acquire(&mut self) -> bool {
        let now = self.clock.now();
        self.prune(now);

        if (self.timestamps.len() as u32) < self.max_requests {
            self.timestamps.push_back(now);
            true
        } else {
            false
        }
    }

    /// Minimum wait until `try_acquire` could next return `true`.
    ///
    /// Zero when nothing has been accepted yet or the oldest entry has
    /// already expired. This is a lower bound: when the limiter is under
    /// capacity, `try_acquire` already succeeds. Does not mutate the log;
    /// `try_acquire` remains the authoritative check.
    pub fn time_until_next_slot(&self) -> Duration {
        let Some(oldest) = self.timestamps.front() else {
            return Duration::ZERO;
        };
        let elapsed = self.clock.now().duration_since(*oldest);
        self.window.saturating_sub(elapsed)
    }

    /// Number of non-expired accepted requests in the window.
    pub fn current_count(&self) -> u32 {
        let now = self.clock.now();
        self.timestamps
            .iter()
            .filter(|t| now.duration_since(**t) < self.window)
            .count() as u32
    }

    /// The configured request limit.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// The configured window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Drop entries that have aged out of the window.
    ///
    /// An entry exactly `window` old is expired: the slot it held is free
    /// again.
    fn prune(&mut self, now: Instant) {
        while self
            .timestamps
            .front()
            .is_some_and(|t| now.duration_since(*t) >= self.window)
        {
            self.timestamps.pop_front();
        }
    }
}
