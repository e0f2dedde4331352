//! Entity-path checks, run most-specific-first.

pub mod abstraction;
pub mod category;
pub mod over_specific;
pub mod small_model;
pub mod source_support;

use ace_core::config::ModelSize;
use ace_core::models::{Chunk, Entity};

use super::CheckHit;

/// Run every entity check and collect all hits.
pub fn run_all(entity: &Entity, chunks: &[Chunk], model_size: ModelSize) -> Vec<CheckHit> {
    let mut hits = Vec::new();

    if let Some(hit) = source_support::check(entity, chunks) {
        hits.push(hit);
    }
    if let Some(hit) = abstraction::check(entity) {
        hits.push(hit);
    }
    if model_size.is_small() {
        hits.extend(small_model::check(entity));
    }
    if let Some(hit) = category::check(entity) {
        hits.push(hit);
    }
    if let Some(hit) = over_specific::check(entity) {
        hits.push(hit);
    }

    hits
}
