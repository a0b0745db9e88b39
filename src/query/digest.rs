//! Keyword-based extraction over leaflet text.

use super::QueryIntent;

/// Fallback snippet length when no sentence matches.
const FALLBACK_SNIPPET_CHARS: usize = 150;
/// How many matching sentences to keep.
const MAX_SENTENCES: usize = 2;

/// Pull the sentences most relevant to an intent out of leaflet text.
///
/// Splits on sentence terminators, keeps up to two sentences containing
/// one of the intent's keywords, and falls back to a prefix snippet of
/// the content when nothing matches.
pub fn extract_relevant(content: &str, intent: QueryIntent) -> String {
    let keywords = intent.keywords();

    let matching: Vec<&str> = content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .filter(|sentence| {
            let sentence = sentence.to_lowercase();
            keywords.iter().any(|keyword| sentence.contains(keyword))
        })
        .take(MAX_SENTENCES)
        .collect();

    if matching.is_empty() {
        snippet(content, FALLBACK_SNIPPET_CHARS)
    } else {
        matching.join(". ")
    }
}

/// Truncate text to at most `max_chars` characters, appending an ellipsis
/// when anything was cut.
///
/// Counts `char`s, not bytes: leaflet text is Turkish and slicing by byte
/// index would split multi-byte characters.
pub fn snippet(content: &str, max_chars: usize) -> String {
    let content = content.trim();
    if content.chars().count() <= max_chars {
        return content.to_string();
    }

    let truncated: String = content.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAFLET: &str = "Bu ilaç ağrı tedavisinde kullanılır. Günde iki \
        tablet alınması önerilir. Nadir durumlarda baş dönmesi gibi yan \
        etkiler görülebilir. Etken madde parasetamoldür.";

    #[test]
    fn test_extracts_dosage_sentence() {
        let extracted = extract_relevant(LEAFLET, QueryIntent::Dosage);
        assert!(extracted.contains("Günde iki"));
        assert!(!extracted.contains("Etken madde"));
    }

    #[test]
    fn test_extracts_side_effect_sentence() {
        let extracted = extract_relevant(LEAFLET, QueryIntent::SideEffects);
        assert!(extracted.contains("yan"));
        assert!(extracted.contains("etkiler"));
    }

    #[test]
    fn test_extraction_caps_at_two_sentences() {
        let content = "Doz birinci cümle. Doz ikinci cümle. Doz üçüncü cümle.";
        let extracted = extract_relevant(content, QueryIntent::Dosage);
        assert!(extracted.contains("birinci"));
        assert!(extracted.contains("ikinci"));
        assert!(!extracted.contains("üçüncü"));
    }

    #[test]
    fn test_extraction_matches_case_insensitively() {
        let content = "DOZ AŞIMINDA doktora başvurun. Alakasız cümle.";
        let extracted = extract_relevant(content, QueryIntent::Dosage);
        assert!(extracted.contains("DOZ AŞIMINDA"));
    }

    #[test]
    fn test_falls_back_to_snippet_when_nothing_matches() {
        let content = "Saklama koşulları hakkında genel açıklama.";
        let extracted = extract_relevant(content, QueryIntent::Dosage);
        assert_eq!(extracted, content);
    }

    #[test]
    fn test_fallback_truncates_long_content() {
        let content = "x".repeat(400);
        let extracted = extract_relevant(&content, QueryIntent::Dosage);
        assert!(extracted.len() < content.len());
        assert!(extracted.ends_with("..."));
    }

    #[test]
    fn test_snippet_keeps_short_text_intact() {
        assert_eq!(snippet("kısa metin", 300), "kısa metin");
    }

    #[test]
    fn test_snippet_counts_chars_not_bytes() {
        // 10 multi-byte characters; a byte-indexed cut at 5 would panic.
        let text = "ğğğğğğğğğğ";
        let cut = snippet(text, 5);
        assert_eq!(cut, "ğğğğğ...");
    }

    #[test]
    fn test_snippet_trims_trailing_whitespace_before_ellipsis() {
        let text = "kelime sonu         devam ediyor burada uzunca bir metin";
        let cut = snippet(text, 12);
        assert_eq!(cut, "kelime sonu...");
    }
}
