//! Collaborator seams. The ACE core depends on these narrow interfaces;
//! the concrete RAG engine implements them.

pub mod knowledge_store;
pub mod llm;

pub use knowledge_store::KnowledgeStore;
pub use llm::LlmClient;
