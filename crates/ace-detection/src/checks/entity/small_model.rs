//! Small-model risk checks.
//!
//! 1.5b/3b extraction models fail in characteristic ways: runaway entity
//! names, abstraction-heavy descriptions, claims without concrete anchors,
//! and adverb stuffing. Each sub-check contributes its own risk factor at
//! low weight so they convict only in combination.

use std::sync::LazyLock;

use ace_core::models::Entity;
use regex::Regex;

use crate::checks::CheckHit;
use crate::text;

/// Weight per fired sub-check.
const WEIGHT: f64 = 0.1;

const MAX_NAME_LEN: usize = 50;
const ABSTRACT_RATIO_THRESHOLD: f64 = 0.2;
const CONCRETE_CHECK_MIN_LEN: usize = 100;
const MAX_ADVERBS: usize = 3;

/// Abstraction vocabulary for the description-ratio sub-check.
const ABSTRACT_WORDS: &[&str] = &[
    "concept",
    "framework",
    "principle",
    "paradigm",
    "theory",
    "theoretical",
    "notion",
    "essence",
    "abstract",
    "fundamental",
    "holistic",
    "metaphysical",
    "philosophical",
    "sophisticated",
];

/// Markers that anchor a description to something concrete.
static CONCRETE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\d|\bfor example\b|\bsuch as\b|\be\.g\.|\bnamely\b|"[^"]+")"#).unwrap()
});

pub fn check(entity: &Entity) -> Vec<CheckHit> {
    let mut hits = Vec::new();

    if entity.name.chars().count() > MAX_NAME_LEN {
        hits.push(CheckHit::new(
            WEIGHT,
            "excessive_name_length",
            format!("entity name is {} chars", entity.name.chars().count()),
        ));
    }

    let tokens = text::tokenize(&entity.description);
    if !tokens.is_empty() {
        let abstract_count = tokens
            .iter()
            .filter(|t| ABSTRACT_WORDS.contains(&t.as_str()))
            .count();
        let ratio = abstract_count as f64 / tokens.len() as f64;
        if ratio > ABSTRACT_RATIO_THRESHOLD {
            hits.push(CheckHit::new(
                WEIGHT,
                "high_abstraction_ratio",
                format!("{:.0}% of description words are abstractions", ratio * 100.0),
            ));
        }
    }

    if entity.description.chars().count() > CONCRETE_CHECK_MIN_LEN
        && !CONCRETE_RE.is_match(&entity.description)
    {
        hits.push(CheckHit::new(
            WEIGHT,
            "no_concrete_examples",
            "long description without a single concrete marker",
        ));
    }

    let adverbs = text::adverb_count(&entity.description);
    if adverbs > MAX_ADVERBS {
        hits.push(CheckHit::new(
            WEIGHT,
            "adverb_heavy",
            format!("{adverbs} adverbs in description"),
        ));
    }

    hits
}
