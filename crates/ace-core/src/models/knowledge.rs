//! Wire types for the knowledge-store collaborator.

use serde::{Deserialize, Serialize};

/// One extracted entity as the knowledge store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub description: String,
}

/// One extracted relationship between two named entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub target: String,
    pub description: String,
}

/// One retrieved source text chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
}

/// Everything the knowledge store returns for a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeData {
    pub entities: Vec<Entity>,
    pub relationships: Vec<Relationship>,
    pub chunks: Vec<Chunk>,
}

/// Optional retrieval tuning passed through to the knowledge store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// Retrieval mode hint (e.g. "local", "global", "hybrid").
    pub mode: Option<String>,
    /// Result count hint.
    pub top_k: Option<usize>,
}

/// Result of `query_data`: the collaborator reports failure as a status,
/// not an exception, and the Generator treats it the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Success { data: KnowledgeData },
    Error { message: String },
}

/// How `merge_entities` combines the merged records.
///
/// Fixed policy: descriptions concatenate, the first entity's type wins.
/// Kept as an explicit struct so the policy is visible at call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStrategy {
    pub description: DescriptionMerge,
    pub entity_type: TypeMerge,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionMerge {
    #[default]
    Concatenate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeMerge {
    #[default]
    KeepFirst,
}
