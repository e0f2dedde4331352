//! Shared text heuristics used across checks.

/// Lowercased word tokens, short words dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 2)
        .map(|w| w.to_lowercase())
        .collect()
}

/// Fraction of `a`'s tokens that also appear in `b`. Returns 0.0 when `a`
/// has no tokens.
pub fn overlap_ratio(a: &str, b: &str) -> f64 {
    let a_tokens = tokenize(a);
    if a_tokens.is_empty() {
        return 0.0;
    }
    let b_tokens = tokenize(b);
    let overlap = a_tokens.iter().filter(|t| b_tokens.contains(t)).count();
    overlap as f64 / a_tokens.len() as f64
}

/// Case-insensitive substring containment.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Count of "-ly" adverbs among the tokens.
pub fn adverb_count(text: &str) -> usize {
    tokenize(text)
        .iter()
        .filter(|t| t.len() > 4 && t.ends_with("ly"))
        .count()
}

/// First `max_chars` of a chunk, for evidence snippets.
pub fn snippet(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{cut}…")
}
