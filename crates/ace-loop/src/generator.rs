//! Generator — strategy memory + retrieved context + query → answer.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use ace_core::constants::{MAX_CONTEXT_CHUNKS, MAX_CONTEXT_ENTITIES, MAX_CONTEXT_RELATIONSHIPS};
use ace_core::models::{GenerationOutcome, GenerationResult, KnowledgeData, QueryOutcome, QueryParam};
use ace_core::traits::{KnowledgeStore, LlmClient};
use ace_playbook::Playbook;

const SYSTEM_INSTRUCTIONS: &str = "\
You are a retrieval-grounded assistant. Answer the query using ONLY the
provided context. Follow the playbook directives and strategies below.";

/// Truncation length for per-item descriptions in the context block.
const ITEM_DESCRIPTION_CHARS: usize = 120;

/// Composes the generation prompt and invokes the LLM.
///
/// Every failure is recovered locally into `GenerationOutcome::Failed`;
/// retries, if any, belong to the LLM collaborator, not this layer.
pub struct Generator {
    store: Arc<dyn KnowledgeStore>,
    llm: Arc<dyn LlmClient>,
    playbook: Arc<Mutex<Playbook>>,
}

impl Generator {
    pub fn new(
        store: Arc<dyn KnowledgeStore>,
        llm: Arc<dyn LlmClient>,
        playbook: Arc<Mutex<Playbook>>,
    ) -> Self {
        Self {
            store,
            llm,
            playbook,
        }
    }

    /// Answer `query` from the knowledge store, guided by the playbook.
    pub async fn generate(&self, query: &str, param: Option<&QueryParam>) -> GenerationOutcome {
        let mut trajectory = Vec::new();

        // Step 1: retrieve context. A store-side error ends the cycle here.
        trajectory.push("retrieve".to_string());
        let data = match self.store.query_data(query, param).await {
            QueryOutcome::Success { data } => data,
            QueryOutcome::Error { message } => {
                info!(error = %message, "knowledge store query failed");
                return GenerationOutcome::Failed {
                    error: "knowledge store query failed".to_string(),
                    details: message,
                };
            }
        };

        // Step 2: render the strategy memory.
        trajectory.push("render_playbook".to_string());
        let playbook_text = self.lock_playbook().render();
        let playbook_used = !playbook_text.trim().is_empty();

        // Step 3 + 4: bounded context block, then the full prompt.
        trajectory.push("build_prompt".to_string());
        let context_block = format_context(&data);
        let prompt = format!(
            "{SYSTEM_INSTRUCTIONS}\n\n# Playbook\n{playbook_text}\n# Retrieved Context\n{context_block}\n# Query\n{query}\n\nAnswer:"
        );
        debug!(prompt_chars = prompt.len(), "generation prompt assembled");

        // Step 5: invoke the LLM.
        trajectory.push("llm_complete".to_string());
        match self.llm.complete(&prompt).await {
            Ok(response) => GenerationOutcome::Completed(GenerationResult {
                response,
                context_data: data,
                playbook_used,
                trajectory,
            }),
            Err(e) => GenerationOutcome::Failed {
                error: "LLM execution failed".to_string(),
                details: e.to_string(),
            },
        }
    }

    fn lock_playbook(&self) -> MutexGuard<'_, Playbook> {
        self.playbook.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Format retrieved data into a bounded text block. Hard caps keep prompt
/// growth independent of retrieval size.
pub(crate) fn format_context(data: &KnowledgeData) -> String {
    let mut out = String::from("## Entities\n");
    for entity in data.entities.iter().take(MAX_CONTEXT_ENTITIES) {
        out.push_str(&format!(
            "- {} ({}): {}\n",
            entity.name,
            entity.entity_type,
            truncate(&entity.description, ITEM_DESCRIPTION_CHARS)
        ));
    }

    out.push_str("\n## Relationships\n");
    for rel in data.relationships.iter().take(MAX_CONTEXT_RELATIONSHIPS) {
        out.push_str(&format!(
            "- {} -> {}: {}\n",
            rel.source,
            rel.target,
            truncate(&rel.description, ITEM_DESCRIPTION_CHARS)
        ));
    }

    out.push_str("\n## Source Chunks\n");
    for (i, chunk) in data.chunks.iter().take(MAX_CONTEXT_CHUNKS).enumerate() {
        out.push_str(&format!("[{}] {}\n", i + 1, chunk.content));
    }

    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}
