//! # ace-core
//!
//! Foundation crate for the ACE (Agentic Context Evolution) self-correction
//! loop. Defines all shared types, collaborator traits, errors, config, and
//! constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AceConfig, ModelSize, ReasoningDepth};
pub use errors::{AceError, AceResult};
pub use models::{
    GenerationOutcome, GenerationResult, HallucinationDetection, HallucinationType,
    KnowledgeData, PlaybookContent, RepairAction, RepairStatus, StagedRepair,
};
pub use traits::{KnowledgeStore, LlmClient};
