//! Cross-domain check: relationships bridging unrelated keyword domains.

use ace_core::models::{HallucinationType, Relationship};

use crate::checks::CheckHit;
use crate::text;

/// Weight added when two distinct domains are mixed.
const WEIGHT: f64 = 0.2;

/// Keyword domains. A relationship whose text draws from two of these at
/// once ("quantum" + "spiritual") is the classic small-model confabulation.
const DOMAINS: &[(&str, &[&str])] = &[
    (
        "scientific",
        &["quantum", "neural", "molecular", "empirical", "measured", "experiment", "scientific"],
    ),
    (
        "philosophical",
        &["consciousness", "metaphysical", "existential", "moral", "ethical", "philosophical"],
    ),
    (
        "technical",
        &["algorithm", "protocol", "database", "compiler", "kernel", "technical"],
    ),
    (
        "mystical",
        &["spiritual", "cosmic", "divine", "mystical", "transcendent", "astral"],
    ),
];

fn domains_in(tokens: &[String]) -> Vec<&'static str> {
    DOMAINS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| tokens.iter().any(|t| t == w)))
        .map(|(name, _)| *name)
        .collect()
}

pub fn check(relationship: &Relationship) -> Option<CheckHit> {
    let combined = format!(
        "{} {} {}",
        relationship.source, relationship.target, relationship.description
    );
    let tokens = text::tokenize(&combined);
    let domains = domains_in(&tokens);

    if domains.len() < 2 {
        return None;
    }

    Some(
        CheckHit::new(
            WEIGHT,
            "cross_domain_mix",
            format!("mixes {} and {} vocabulary", domains[0], domains[1]),
        )
        .with_type(HallucinationType::CrossDomain),
    )
}
