/// Result of parsing free-text LLM output against a strict schema.
///
/// Distinguishes "parsed to an empty list" from "could not parse at all",
/// so callers can fall back differently for each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Parsed(T),
    Unparseable { error: String, raw: String },
}

impl<T> ParseOutcome<T> {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }
}
