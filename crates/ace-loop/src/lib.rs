//! # ace-loop
//!
//! The ACE self-correction cycle: Generator answers a query from the
//! knowledge store and the evolving playbook, the Reflector critiques the
//! answer and verifies the knowledge used, and the Curator folds lessons
//! back into the playbook and applies (or stages) corrective repairs.
//!
//! One cycle is a strict pipeline — Generator, then Reflector, then
//! Curator — with no internal parallelism. Cancellation and timeouts are
//! the collaborators' concern.

pub mod curator;
pub mod generator;
pub mod parse;
pub mod reflector;
pub mod templates;

use std::sync::{Arc, Mutex};

use tracing::info;

use ace_core::config::AceConfig;
use ace_core::models::{GenerationOutcome, QueryParam};
use ace_core::traits::{KnowledgeStore, LlmClient};
use ace_detection::HallucinationDetector;
use ace_playbook::Playbook;

pub use curator::{BatchSummary, Curator};
pub use generator::Generator;
pub use reflector::Reflector;

/// Everything one cycle produced.
#[derive(Debug)]
pub struct CycleReport {
    pub generation: GenerationOutcome,
    pub insights: Vec<String>,
    pub repairs: BatchSummary,
}

/// Owns the three components and runs full cycles.
pub struct AceLoop {
    generator: Generator,
    reflector: Reflector,
    curator: Curator,
}

impl AceLoop {
    /// Wire up a loop instance: load persisted state, share the playbook
    /// between Generator and Curator, hand the collaborators to everyone
    /// who needs them.
    pub fn new(
        config: &AceConfig,
        store: Arc<dyn KnowledgeStore>,
        llm: Arc<dyn LlmClient>,
    ) -> Self {
        let playbook = Arc::new(Mutex::new(Playbook::load(config)));
        let detector = HallucinationDetector::default();

        let generator = Generator::new(store.clone(), llm.clone(), playbook.clone());
        let reflector = Reflector::new(
            llm,
            detector,
            config.reasoning_depth,
            config.model_size,
        );
        let curator = Curator::load(config, playbook, store);

        Self {
            generator,
            reflector,
            curator,
        }
    }

    /// Run one Generator → Reflector → Curator cycle.
    ///
    /// A failed generation short-circuits: there is nothing to reflect on,
    /// so the report carries the failure and empty curation results.
    pub async fn run_cycle(&mut self, query: &str, param: Option<&QueryParam>) -> CycleReport {
        let generation = self.generator.generate(query, param).await;

        let result = match generation.as_completed() {
            Some(result) => result.clone(),
            None => {
                return CycleReport {
                    generation,
                    insights: Vec::new(),
                    repairs: BatchSummary::default(),
                }
            }
        };

        let insights = self.reflector.reflect(query, &result).await;
        let proposed = self.reflector.reflect_graph_issues(query, &result).await;

        self.curator.curate(&insights);
        let repairs = self.curator.apply_repairs(proposed).await;

        info!(
            insights = insights.len(),
            executed = repairs.executed,
            staged = repairs.staged,
            failed = repairs.failed,
            "cycle complete"
        );

        CycleReport {
            generation,
            insights,
            repairs,
        }
    }

    /// Direct access to the curator, for HITL approval flows.
    pub fn curator(&self) -> &Curator {
        &self.curator
    }

    pub fn curator_mut(&mut self) -> &mut Curator {
        &mut self.curator
    }
}
