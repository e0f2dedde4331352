//! Relationship-path checks, run most-specific-first.

pub mod complexity;
pub mod concrete_abstract;
pub mod cooccurrence;
pub mod cross_domain;
pub mod false_pattern;

use ace_core::config::ModelSize;
use ace_core::models::{Chunk, Relationship};

use super::CheckHit;

/// Run every relationship check and collect all hits.
pub fn run_all(
    relationship: &Relationship,
    chunks: &[Chunk],
    model_size: ModelSize,
) -> Vec<CheckHit> {
    let mut hits = Vec::new();

    if let Some(hit) = cooccurrence::check(relationship, chunks) {
        hits.push(hit);
    }
    if let Some(hit) = false_pattern::check(relationship) {
        hits.push(hit);
    }
    if let Some(hit) = cross_domain::check(relationship) {
        hits.push(hit);
    }
    if let Some(hit) = concrete_abstract::check(relationship) {
        hits.push(hit);
    }
    if model_size.is_small() {
        hits.extend(complexity::check(relationship));
    }

    hits
}
