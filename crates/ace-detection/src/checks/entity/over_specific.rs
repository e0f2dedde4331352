//! Over-specificity check: suspicious precision that sources rarely carry.

use std::sync::LazyLock;

use ace_core::models::{Entity, HallucinationType};
use regex::Regex;

use crate::checks::CheckHit;

/// Weight added when fabricated-looking precision is found.
const WEIGHT: f64 = 0.2;

/// "exactly 95.3%", "precisely 12.7 times" — decimal precision introduced
/// by the model, not the source.
static PRECISE_QUANTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(exactly|precisely)\s+\d+(\.\d+)?\s*(%|percent|times)?|\b\d+\.\d+\s*(%|percent)").unwrap()
});

/// "remarkably advanced", "extraordinarily sophisticated" — intensified
/// qualifiers that state an evaluation as a fact.
static INTENSIFIED_CLAIM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(remarkably|extraordinarily|incredibly|unprecedentedly|astonishingly)\s+(advanced|sophisticated|powerful|accurate|effective)\b",
    )
    .unwrap()
});

pub fn check(entity: &Entity) -> Option<CheckHit> {
    let mat = PRECISE_QUANTIFIER_RE
        .find(&entity.description)
        .or_else(|| INTENSIFIED_CLAIM_RE.find(&entity.description))?;

    Some(
        CheckHit::new(
            WEIGHT,
            "suspicious_precision",
            format!("suspiciously precise claim '{}'", mat.as_str().trim()),
        )
        .with_type(HallucinationType::OverSpecific),
    )
}
