//! False-category check: entity type contradicted by its own description.

use ace_core::models::{Entity, HallucinationType};

use crate::checks::CheckHit;
use crate::text;

/// Weight added on a type/vocabulary conflict.
const WEIGHT: f64 = 0.3;

/// For each entity type, vocabulary that should never describe it.
/// A "person" described as a "concept" is a category error, not a person.
const CONFLICTS: &[(&str, &[&str])] = &[
    ("person", &["concept", "framework", "theory", "principle", "methodology"]),
    ("organization", &["emotion", "feeling", "concept", "theory"]),
    ("location", &["idea", "concept", "theory", "emotion"]),
    ("event", &["framework", "concept", "doctrine"]),
    ("technology", &["emotion", "feeling", "belief"]),
];

pub fn check(entity: &Entity) -> Option<CheckHit> {
    let entity_type = entity.entity_type.to_lowercase();
    let (_, forbidden) = CONFLICTS.iter().find(|(t, _)| *t == entity_type)?;

    let tokens = text::tokenize(&entity.description);
    let conflict = forbidden.iter().find(|w| tokens.iter().any(|t| t == *w))?;

    Some(
        CheckHit::new(
            WEIGHT,
            "type_vocabulary_conflict",
            format!("type '{}' described as '{}'", entity.entity_type, conflict),
        )
        .with_type(HallucinationType::FalseCategory),
    )
}
