use serde::{Deserialize, Serialize};

use crate::models::knowledge::KnowledgeData;

/// A completed generation: the answer plus everything the Reflector needs
/// to critique it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub response: String,
    /// The retrieved context the answer was grounded in.
    pub context_data: KnowledgeData,
    /// Whether a non-empty playbook render was injected into the prompt.
    pub playbook_used: bool,
    /// Labels of the pipeline steps that actually executed, in order.
    pub trajectory: Vec<String>,
}

/// Outcome of one generation. The Generator recovers every collaborator
/// failure locally; it never returns `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Completed(GenerationResult),
    Failed { error: String, details: String },
}

impl GenerationOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, GenerationOutcome::Failed { .. })
    }

    pub fn as_completed(&self) -> Option<&GenerationResult> {
        match self {
            GenerationOutcome::Completed(result) => Some(result),
            GenerationOutcome::Failed { .. } => None,
        }
    }
}
