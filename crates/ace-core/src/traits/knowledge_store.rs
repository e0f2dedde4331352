use async_trait::async_trait;

use crate::errors::AceResult;
use crate::models::knowledge::{MergeStrategy, QueryOutcome, QueryParam};

/// The knowledge-store collaborator: retrieval plus the three mutations the
/// Curator is allowed to apply.
///
/// `query_data` reports failure as a status (`QueryOutcome::Error`); the
/// mutation calls may fail with `AceError::KnowledgeStore` and the Curator
/// isolates those failures per repair.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    async fn query_data(&self, query: &str, param: Option<&QueryParam>) -> QueryOutcome;

    async fn delete_entity(&self, name: &str) -> AceResult<()>;

    async fn delete_relation(&self, source: &str, target: &str) -> AceResult<()>;

    async fn merge_entities(
        &self,
        sources: &[String],
        target: &str,
        strategy: &MergeStrategy,
    ) -> AceResult<()>;
}
