//! Query intent detection.

use serde::{Deserialize, Serialize};

/// The kind of answer a drug-information query is asking for.
///
/// Detection is keyword containment over the lowercased query, checked in
/// order of specificity; anything unmatched is `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// Side-effect questions ("yan etkileri neler?")
    SideEffects,
    /// Dosage questions ("dozu nasıl?")
    Dosage,
    /// Usage questions ("nasıl kullanılır?")
    Usage,
    /// Everything else
    General,
}

impl QueryIntent {
    /// Detect the intent of a free-text query.
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        if query.contains("yan etki") {
            QueryIntent::SideEffects
        } else if query.contains("doz") {
            QueryIntent::Dosage
        } else if query.contains("kullan") {
            QueryIntent::Usage
        } else {
            QueryIntent::General
        }
    }

    /// Keywords that mark a leaflet sentence as relevant to this intent.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            QueryIntent::SideEffects => &["yan etki", "istenmeyen", "etki", "reaksiyon"],
            QueryIntent::Dosage => &["doz", "miktar", "günde", "tablet", "mg"],
            QueryIntent::Usage => &["kullan", "alın", "kullanım", "nasıl"],
            QueryIntent::General => &["etken madde", "içerik", "nedir", "tedavi"],
        }
    }
}
