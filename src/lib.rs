//! Prospekt Guard - Client-Side Protection for a Drug-Information Assistant
//!
//! This crate implements the protection layer a chat-style drug-information
//! search client embeds in front of its outbound requests: a sliding-window
//! request-rate limiter with explicit per-session ownership, plus the keyword
//! heuristics the assistant uses to triage queries and pull relevant
//! sentences out of package-leaflet text.

pub mod throttle;
pub mod session;
pub mod query;
pub mod clock;
pub mod config;
pub mod error;
