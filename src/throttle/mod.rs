//! Request throttling logic and state.

mod decision;
mod limiter;

pub use decision::ThrottleDecision;
pub use limiter::RequestRateLimiter;
