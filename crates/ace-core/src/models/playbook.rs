use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Persisted content of the strategy memory.
///
/// Owned exclusively by the Playbook; mutated only through Playbook methods
/// and rewritten to disk as a whole document on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybookContent {
    /// Ordered, stable directives injected into every generation prompt.
    pub core_directives: Vec<String>,
    /// Named operational strategies (unique keys, upserted by the Curator).
    pub strategies: BTreeMap<String, String>,
    /// Append-only lessons, de-duplicated by exact match.
    pub lessons_learned: Vec<String>,
    pub version: u32,
    /// RFC 3339 timestamp of the last mutation.
    pub last_updated: String,
}

impl Default for PlaybookContent {
    fn default() -> Self {
        let mut strategies = BTreeMap::new();
        strategies.insert(
            "verify_before_asserting".to_string(),
            "Cross-check extracted entities against source chunks before presenting them as fact."
                .to_string(),
        );
        Self {
            core_directives: vec![
                "Ground every answer in the retrieved context; do not invent entities or relationships.".to_string(),
                "Cite entities by their exact names as they appear in the knowledge store.".to_string(),
                "When the retrieved context is insufficient, say so instead of speculating.".to_string(),
            ],
            strategies,
            lessons_learned: Vec::new(),
            version: 1,
            last_updated: Utc::now().to_rfc3339(),
        }
    }
}
