//! Query triage and leaflet text heuristics.

mod digest;
mod intent;

pub use digest::{extract_relevant, snippet};
pub use intent::QueryIntent;
