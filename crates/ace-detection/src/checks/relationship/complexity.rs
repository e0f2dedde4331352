//! Small-model complexity heuristic for relationship descriptions.
//!
//! Small models compensate for missing evidence with elaborate sentences:
//! long descriptions, clause stacking, and chained causal connectives.

use ace_core::models::Relationship;

use crate::checks::CheckHit;
use crate::text;

/// Weight per fired sub-check.
const WEIGHT: f64 = 0.1;

const MAX_DESCRIPTION_LEN: usize = 200;
const MAX_CLAUSES: usize = 3;
const CAUSAL_CONNECTIVE_THRESHOLD: usize = 2;

const CAUSAL_CONNECTIVES: &[&str] = &[
    "because",
    "although",
    "therefore",
    "consequently",
    "thus",
    "hence",
];

pub fn check(relationship: &Relationship) -> Vec<CheckHit> {
    let description = &relationship.description;
    let mut hits = Vec::new();

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        hits.push(CheckHit::new(
            WEIGHT,
            "long_description",
            format!("description is {} chars", description.chars().count()),
        ));
    }

    let clauses = description.matches([',', ';']).count();
    if clauses > MAX_CLAUSES {
        hits.push(CheckHit::new(
            WEIGHT,
            "clause_stacking",
            format!("{clauses} clause separators"),
        ));
    }

    let tokens = text::tokenize(description);
    let connectives = tokens
        .iter()
        .filter(|t| CAUSAL_CONNECTIVES.contains(&t.as_str()))
        .count();
    if connectives >= CAUSAL_CONNECTIVE_THRESHOLD {
        hits.push(CheckHit::new(
            WEIGHT,
            "causal_chain",
            format!("{connectives} causal connectives"),
        ));
    }

    hits
}
