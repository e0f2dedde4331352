//! Reflector — critiques answers and proposes knowledge-store repairs.
//!
//! Reflection is advisory: both entry points degrade to fallback values on
//! any LLM or parse failure and never abort the caller's pipeline.

use std::sync::Arc;

use tracing::{info, warn};

use ace_core::config::{ModelSize, ReasoningDepth};
use ace_core::constants::MAX_LESSONS_PER_REFLECTION;
use ace_core::models::{GenerationResult, ParseOutcome, RepairAction};
use ace_core::traits::LlmClient;
use ace_detection::HallucinationDetector;

use crate::parse;
use crate::templates::{self, TaskType};

pub struct Reflector {
    llm: Arc<dyn LlmClient>,
    detector: HallucinationDetector,
    depth: ReasoningDepth,
    model_size: ModelSize,
}

impl Reflector {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        detector: HallucinationDetector,
        depth: ReasoningDepth,
        model_size: ModelSize,
    ) -> Self {
        Self {
            llm,
            detector,
            depth,
            model_size,
        }
    }

    /// Critique a completed generation into 1–3 lessons.
    ///
    /// Returns a one-element failure description when the LLM call fails or
    /// its output cannot be validated — callers can always `curate` the
    /// result directly.
    pub async fn reflect(&self, query: &str, generation: &GenerationResult) -> Vec<String> {
        let instructions = templates::render(
            templates::select(TaskType::GeneralReflection, self.depth),
            templates::lesson_format_instructions(),
        );
        let prompt = format!(
            "{instructions}\n\n# Query\n{query}\n\n# Answer\n{answer}\n\n# Steps Taken\n{trajectory}\n",
            answer = generation.response,
            trajectory = generation.trajectory.join(" -> "),
        );

        let raw = match self.llm.complete(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "reflection LLM call failed");
                return vec![format!("reflection unavailable: {e}")];
            }
        };

        match parse::parse_lessons(&raw) {
            ParseOutcome::Parsed(mut lessons) => {
                lessons.truncate(MAX_LESSONS_PER_REFLECTION);
                lessons
            }
            ParseOutcome::Unparseable { error, .. } => {
                warn!(error = %error, "reflection output was not a JSON lesson array");
                vec![format!("reflection output could not be parsed: {error}")]
            }
        }
    }

    /// Verify the generation's knowledge graph and propose repair actions.
    ///
    /// The detector pre-screens the retrieved entities and relationships;
    /// its flagged candidates are handed to the LLM as suspects so the
    /// verification prompt starts from evidence, not a blank slate.
    /// Failures degrade to an empty action list.
    pub async fn reflect_graph_issues(
        &self,
        query: &str,
        generation: &GenerationResult,
    ) -> Vec<RepairAction> {
        let suspects = self.flag_suspects(generation);
        let instructions = templates::render(
            templates::select(TaskType::GraphVerification, self.depth),
            templates::repair_format_instructions(),
        );
        let context = crate::generator::format_context(&generation.context_data);
        let prompt = format!(
            "{instructions}\n\n# Query\n{query}\n\n# Extracted Graph and Sources\n{context}\n# Detector Flags\n{suspects}\n",
        );

        let raw = match self.llm.complete(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "graph verification LLM call failed");
                return Vec::new();
            }
        };

        match parse::parse_repairs(&raw) {
            ParseOutcome::Parsed(repairs) => {
                info!(count = repairs.len(), "graph verification proposed repairs");
                repairs
            }
            ParseOutcome::Unparseable { error, .. } => {
                warn!(error = %error, "graph verification output was not a repair array");
                Vec::new()
            }
        }
    }

    /// One line per detector-flagged fact, or a no-findings note.
    fn flag_suspects(&self, generation: &GenerationResult) -> String {
        let data = &generation.context_data;
        let mut lines = Vec::new();

        for entity in &data.entities {
            let verdict = self
                .detector
                .detect_entity(entity, &data.chunks, self.model_size);
            if verdict.is_hallucinated {
                lines.push(format!(
                    "- entity '{}' suspect ({:.2}): {}",
                    entity.name, verdict.confidence, verdict.reasoning
                ));
            }
        }
        for rel in &data.relationships {
            let verdict = self
                .detector
                .detect_relationship(rel, &data.chunks, self.model_size);
            if verdict.is_hallucinated {
                lines.push(format!(
                    "- relationship '{}' -> '{}' suspect ({:.2}): {}",
                    rel.source, rel.target, verdict.confidence, verdict.reasoning
                ));
            }
        }

        if lines.is_empty() {
            "- none".to_string()
        } else {
            lines.join("\n")
        }
    }
}
