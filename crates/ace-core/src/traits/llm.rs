use async_trait::async_trait;

use crate::errors::AceResult;

/// The LLM-completion collaborator.
///
/// Retry, backoff, and timeouts live behind this trait, not in the loop:
/// callers catch `Err` and degrade, they never re-invoke.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AceResult<String>;
}
