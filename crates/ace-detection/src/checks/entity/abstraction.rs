//! Abstract-concept check: entities that name ideas instead of things.

use std::sync::LazyLock;

use ace_core::models::{Entity, HallucinationType};
use regex::Regex;

use crate::checks::CheckHit;

/// Weight added when abstraction vocabulary is present.
const WEIGHT: f64 = 0.4;

/// Terms that mark an "entity" as an abstraction. Extraction models,
/// small ones especially, promote these to first-class entities even when
/// the source text never names them.
static ABSTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(concepts?|frameworks?|principles?|paradigms?|theor(?:y|ies|etical)|notions?|essence|consciousness|metaphysic(?:s|al)|ideolog(?:y|ies)|philosoph(?:y|ies|ical)|doctrines?|constructs?|holistic)\b",
    )
    .unwrap()
});

pub fn check(entity: &Entity) -> Option<CheckHit> {
    let haystack = format!("{} {}", entity.name, entity.description);
    let mat = ABSTRACT_RE.find(&haystack)?;
    Some(
        CheckHit::new(
            WEIGHT,
            "abstract_concept_language",
            format!("abstraction term '{}' in name or description", mat.as_str()),
        )
        .with_type(HallucinationType::AbstractConcept),
    )
}
