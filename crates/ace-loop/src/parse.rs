//! Tolerant pre-processing, strict validation of LLM output.
//!
//! The tolerance is limited to known wrapper markers (a fenced `reasoning`
//! preamble, Markdown code fences); after stripping, the payload must
//! validate against the schema or the caller gets a typed `Unparseable`.

use ace_core::models::{ParseOutcome, RepairAction};
use tracing::warn;

/// Strip a leading fenced `reasoning` block and surrounding code fences.
pub fn strip_wrappers(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```reasoning") {
        if let Some(end) = rest.find("```") {
            text = rest[end + 3..].trim_start();
        }
    }

    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        match rest.rfind("```") {
            Some(end) => text = &rest[..end],
            None => text = rest,
        }
    }

    text.trim().to_string()
}

/// Parse a JSON array of lesson strings.
pub fn parse_lessons(raw: &str) -> ParseOutcome<Vec<String>> {
    let payload = strip_wrappers(raw);
    match serde_json::from_str::<Vec<String>>(&payload) {
        Ok(lessons) => ParseOutcome::Parsed(lessons),
        Err(e) => ParseOutcome::Unparseable {
            error: e.to_string(),
            raw: raw.to_string(),
        },
    }
}

/// Parse a JSON array of repair actions.
///
/// The array itself must parse; individual elements with unknown or
/// malformed `action` kinds are dropped with a warning so one bad item
/// never discards its siblings.
pub fn parse_repairs(raw: &str) -> ParseOutcome<Vec<RepairAction>> {
    let payload = strip_wrappers(raw);
    let values = match serde_json::from_str::<Vec<serde_json::Value>>(&payload) {
        Ok(values) => values,
        Err(e) => {
            return ParseOutcome::Unparseable {
                error: e.to_string(),
                raw: raw.to_string(),
            }
        }
    };

    let mut repairs = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<RepairAction>(value.clone()) {
            Ok(repair) => repairs.push(repair),
            Err(e) => {
                warn!(error = %e, item = %value, "dropping unrecognized repair action");
            }
        }
    }
    ParseOutcome::Parsed(repairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_code_fence() {
        let raw = "```json\n[\"a\"]\n```";
        assert_eq!(strip_wrappers(raw), "[\"a\"]");
    }

    #[test]
    fn strips_reasoning_block_then_fence() {
        let raw = "```reasoning\nthe entity is unsupported\n```\n```json\n[]\n```";
        assert_eq!(strip_wrappers(raw), "[]");
    }

    #[test]
    fn bare_json_passes_through() {
        assert_eq!(strip_wrappers("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn lessons_parse_strictly() {
        let outcome = parse_lessons("```json\n[\"cite chunks\", \"avoid pronouns\"]\n```");
        assert_eq!(
            outcome,
            ParseOutcome::Parsed(vec!["cite chunks".to_string(), "avoid pronouns".to_string()])
        );
    }

    #[test]
    fn non_json_lessons_are_unparseable() {
        let outcome = parse_lessons("I think the answer was mostly fine.");
        assert!(!outcome.is_parsed());
        assert!(matches!(outcome, ParseOutcome::Unparseable { .. }));
    }

    #[test]
    fn unknown_action_kind_dropped_per_item() {
        let raw = r#"[
            {"action":"delete_entity","name":"Ghost","reason":"unsupported"},
            {"action":"rename_entity","name":"Ghost","reason":"typo"},
            {"action":"delete_relation","source":"A","target":"B","reason":"no co-occurrence"}
        ]"#;
        let ParseOutcome::Parsed(repairs) = parse_repairs(raw) else {
            panic!("array should parse");
        };
        assert_eq!(repairs.len(), 2);
        assert_eq!(repairs[0].kind(), "delete_entity");
        assert_eq!(repairs[1].kind(), "delete_relation");
    }

    #[test]
    fn non_array_repairs_are_unparseable() {
        let outcome = parse_repairs(r#"{"action":"delete_entity"}"#);
        assert!(matches!(outcome, ParseOutcome::Unparseable { .. }));
    }
}
