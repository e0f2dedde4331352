//! Known false-relationship phrasings.
//!
//! Three families, most damning first: asserted equivalence between distinct
//! entities, fabricated causal/proof links, and universal quantification of
//! a single observation.

use std::sync::LazyLock;

use ace_core::models::{HallucinationType, Relationship};
use regex::Regex;

use crate::checks::CheckHit;

static EQUIVALENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(is|are)\s+(essentially|basically|fundamentally|literally)?\s*(the same as|identical to|equivalent to|indistinguishable from)\b",
    )
    .unwrap()
});

static CAUSAL_CLAIM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(directly|single-?handedly|solely)\s+(caused|causes|proves|proved|explains|determines)\b")
        .unwrap()
});

static UNIVERSAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(all|every|always|never|without exception)\b").unwrap()
});

pub fn check(relationship: &Relationship) -> Option<CheckHit> {
    let description = &relationship.description;

    if let Some(mat) = EQUIVALENCE_RE.find(description) {
        return Some(
            CheckHit::new(
                0.3,
                "asserted_equivalence",
                format!("equivalence claim '{}'", mat.as_str().trim()),
            )
            .with_type(HallucinationType::FalseEquivalence),
        );
    }

    if let Some(mat) = CAUSAL_CLAIM_RE.find(description) {
        return Some(
            CheckHit::new(
                0.3,
                "fabricated_causal_link",
                format!("causal claim '{}'", mat.as_str().trim()),
            )
            .with_type(HallucinationType::FalseRelationship),
        );
    }

    if let Some(mat) = UNIVERSAL_RE.find(description) {
        return Some(
            CheckHit::new(
                0.2,
                "universal_quantifier",
                format!("universal claim '{}'", mat.as_str().trim()),
            )
            .with_type(HallucinationType::OverGeneralization),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(description: &str) -> Relationship {
        Relationship {
            source: "A".to_string(),
            target: "B".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn equivalence_outranks_universal() {
        let hit = check(&rel("A is essentially the same as B in all contexts")).unwrap();
        assert_eq!(
            hit.hallucination_type,
            Some(HallucinationType::FalseEquivalence)
        );
    }

    #[test]
    fn causal_claim_fires() {
        let hit = check(&rel("A directly causes B")).unwrap();
        assert_eq!(
            hit.hallucination_type,
            Some(HallucinationType::FalseRelationship)
        );
    }

    #[test]
    fn universal_claim_fires() {
        let hit = check(&rel("A always precedes B")).unwrap();
        assert_eq!(
            hit.hallucination_type,
            Some(HallucinationType::OverGeneralization)
        );
    }

    #[test]
    fn measured_claim_passes() {
        assert!(check(&rel("A collaborated with B on two papers")).is_none());
    }
}
