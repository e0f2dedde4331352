/// Errors crossing component boundaries in the ACE loop.
///
/// Components that must degrade gracefully (Generator, Reflector) return
/// typed outcome enums instead of propagating these; the error type exists
/// for the seams where propagation is correct (collaborator calls, repair
/// execution, persistence round-trips in tests).
#[derive(Debug, thiserror::Error)]
pub enum AceError {
    #[error("persistence failed for {path}: {message}")]
    Persistence { path: String, message: String },

    #[error("knowledge store error: {message}")]
    KnowledgeStore { message: String },

    #[error("LLM execution failed: {message}")]
    Llm { message: String },

    #[error("unparseable LLM output: {message}")]
    Parse { message: String },

    #[error("no pending repair with id {id}")]
    UnknownRepair { id: String },
}

pub type AceResult<T> = Result<T, AceError>;
