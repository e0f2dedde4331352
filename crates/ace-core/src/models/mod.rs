//! Shared data model: one file per record/result type.

pub mod detection;
pub mod generation;
pub mod knowledge;
pub mod playbook;
pub mod reflection;
pub mod repair;

pub use detection::{HallucinationDetection, HallucinationType};
pub use generation::{GenerationOutcome, GenerationResult};
pub use knowledge::{Chunk, Entity, KnowledgeData, MergeStrategy, QueryOutcome, QueryParam, Relationship};
pub use playbook::PlaybookContent;
pub use reflection::ParseOutcome;
pub use repair::{RepairAction, RepairStatus, StagedRepair};
