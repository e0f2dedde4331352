//! Detection check registry.
//!
//! One heuristic per file. Each check inspects a candidate fact and its
//! source chunks and returns `Option<CheckHit>` (or a `Vec` for the
//! multi-signal small-model checks). Checks run in specificity order and
//! never see each other's results.

pub mod entity;
pub mod relationship;

use ace_core::models::HallucinationType;

/// One fired check: its weight contribution, the named risk factor, an
/// optional failure-mode classification, and a one-line note for the
/// verdict's reasoning string.
#[derive(Debug, Clone)]
pub struct CheckHit {
    pub weight: f64,
    pub factor: &'static str,
    pub hallucination_type: Option<HallucinationType>,
    pub note: String,
}

impl CheckHit {
    pub fn new(weight: f64, factor: &'static str, note: impl Into<String>) -> Self {
        Self {
            weight,
            factor,
            hallucination_type: None,
            note: note.into(),
        }
    }

    pub fn with_type(mut self, hallucination_type: HallucinationType) -> Self {
        self.hallucination_type = Some(hallucination_type);
        self
    }
}
