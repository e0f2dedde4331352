//! Concrete/abstract mixing: a real thing related to an idea as a peer.

use std::sync::LazyLock;

use ace_core::models::{HallucinationType, Relationship};
use regex::Regex;

use crate::checks::CheckHit;

/// Weight added when one endpoint is concrete and the other abstract.
const WEIGHT: f64 = 0.2;

static ABSTRACT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(concepts?|theor(?:y|ies)|principles?|consciousness|essence|paradigms?|frameworks?|awareness|ideolog(?:y|ies))\b",
    )
    .unwrap()
});

fn is_abstract(name: &str) -> bool {
    ABSTRACT_NAME_RE.is_match(name)
}

pub fn check(relationship: &Relationship) -> Option<CheckHit> {
    let source_abstract = is_abstract(&relationship.source);
    let target_abstract = is_abstract(&relationship.target);

    if source_abstract == target_abstract {
        return None;
    }

    let (concrete, abstract_name) = if source_abstract {
        (&relationship.target, &relationship.source)
    } else {
        (&relationship.source, &relationship.target)
    };

    Some(
        CheckHit::new(
            WEIGHT,
            "concrete_abstract_mix",
            format!("concrete '{concrete}' related to abstraction '{abstract_name}'"),
        )
        .with_type(HallucinationType::ConcreteAbstract),
    )
}
