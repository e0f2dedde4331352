//! Source-support check: is the entity grounded in any retrieved chunk?

use ace_core::models::{Chunk, Entity};

use crate::checks::CheckHit;
use crate::text;

/// Weight added when no chunk supports the entity.
const WEIGHT: f64 = 0.3;

/// Minimum description/chunk token overlap that counts as support.
const OVERLAP_THRESHOLD: f64 = 0.3;

/// An entity is supported when its name appears verbatim in any chunk, or
/// its description shares at least 30% of its tokens with some chunk.
pub fn check(entity: &Entity, chunks: &[Chunk]) -> Option<CheckHit> {
    if supporting_chunk(entity, chunks).is_some() {
        return None;
    }
    Some(CheckHit::new(
        WEIGHT,
        "no_source_support",
        format!("'{}' does not appear in any source chunk", entity.name),
    ))
}

/// The first chunk that supports the entity, if any. Also used by the
/// detector to build the verdict's evidence snippet.
pub fn supporting_chunk<'a>(entity: &Entity, chunks: &'a [Chunk]) -> Option<&'a Chunk> {
    chunks.iter().find(|chunk| {
        text::contains_ignore_case(&chunk.content, &entity.name)
            || text::overlap_ratio(&entity.description, &chunk.content) >= OVERLAP_THRESHOLD
    })
}
