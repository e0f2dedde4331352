//! HallucinationDetector — runs all checks for a candidate fact,
//! aggregates weights into a clamped confidence, and applies the
//! two-factor conviction rule.

use ace_core::config::ModelSize;
use ace_core::models::{Chunk, Entity, HallucinationDetection, Relationship};
use tracing::debug;

use crate::checks::{self, CheckHit};
use crate::text;

/// Length of evidence snippets quoted from source chunks.
const EVIDENCE_SNIPPET_CHARS: usize = 160;

/// Configuration for the detector.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Confidence must exceed this for a hallucination verdict.
    pub hallucination_threshold: f64,
    /// Minimum number of independent risk factors for a conviction.
    pub min_risk_factors: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            hallucination_threshold: 0.6,
            min_risk_factors: 2,
        }
    }
}

/// Stateless multi-factor scorer. Construct once, call per candidate fact.
#[derive(Debug, Clone, Default)]
pub struct HallucinationDetector {
    config: DetectorConfig,
}

impl HallucinationDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Score one extracted entity against its source chunks.
    pub fn detect_entity(
        &self,
        entity: &Entity,
        chunks: &[Chunk],
        model_size: ModelSize,
    ) -> HallucinationDetection {
        let hits = checks::entity::run_all(entity, chunks, model_size);

        let evidence = match checks::entity::source_support::supporting_chunk(entity, chunks) {
            Some(chunk) => text::snippet(&chunk.content, EVIDENCE_SNIPPET_CHARS),
            None => format!("no source chunk mentions '{}'", entity.name),
        };

        self.verdict(hits, evidence)
    }

    /// Score one extracted relationship against its source chunks.
    pub fn detect_relationship(
        &self,
        relationship: &Relationship,
        chunks: &[Chunk],
        model_size: ModelSize,
    ) -> HallucinationDetection {
        let hits = checks::relationship::run_all(relationship, chunks, model_size);

        let evidence =
            match checks::relationship::cooccurrence::cooccurring_chunk(relationship, chunks) {
                Some(chunk) => text::snippet(&chunk.content, EVIDENCE_SNIPPET_CHARS),
                None => format!(
                    "no source chunk mentions both '{}' and '{}'",
                    relationship.source, relationship.target
                ),
            };

        self.verdict(hits, evidence)
    }

    /// Aggregate hits into the final verdict.
    ///
    /// Confidence is the clamped sum of check weights. The classification is
    /// the first typed hit, since checks run most-specific-first. Conviction
    /// requires the threshold AND at least `min_risk_factors` independent
    /// signals — a single strong check never convicts alone.
    fn verdict(&self, hits: Vec<CheckHit>, evidence: String) -> HallucinationDetection {
        let mut verdict = HallucinationDetection::clean(evidence);

        let mut confidence: f64 = 0.0;
        let mut notes = Vec::with_capacity(hits.len());
        for hit in hits {
            debug!(factor = hit.factor, weight = hit.weight, note = %hit.note, "check fired");
            confidence += hit.weight;
            verdict.model_risk_factors.insert(hit.factor.to_string());
            if verdict.hallucination_type.is_none() {
                verdict.hallucination_type = hit.hallucination_type;
            }
            notes.push(hit.note);
        }

        verdict.confidence = confidence.clamp(0.0, 1.0);
        verdict.reasoning = notes.join("; ");
        verdict.is_hallucinated = verdict.confidence > self.config.hallucination_threshold
            && verdict.model_risk_factors.len() >= self.config.min_risk_factors;

        verdict
    }
}
