//! Co-occurrence check: do both endpoints ever share a source chunk?

use ace_core::models::{Chunk, Relationship};

use crate::checks::CheckHit;
use crate::text;

/// Weight added when the endpoints never co-occur.
const WEIGHT: f64 = 0.3;

/// A relationship between entities that no chunk mentions together has no
/// textual basis, whatever its description says.
pub fn check(relationship: &Relationship, chunks: &[Chunk]) -> Option<CheckHit> {
    if cooccurring_chunk(relationship, chunks).is_some() {
        return None;
    }
    Some(CheckHit::new(
        WEIGHT,
        "no_source_cooccurrence",
        format!(
            "'{}' and '{}' never appear in the same chunk",
            relationship.source, relationship.target
        ),
    ))
}

/// The first chunk mentioning both endpoints, if any.
pub fn cooccurring_chunk<'a>(
    relationship: &Relationship,
    chunks: &'a [Chunk],
) -> Option<&'a Chunk> {
    chunks.iter().find(|chunk| {
        text::contains_ignore_case(&chunk.content, &relationship.source)
            && text::contains_ignore_case(&chunk.content, &relationship.target)
    })
}
