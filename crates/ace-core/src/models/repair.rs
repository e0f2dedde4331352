use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A proposed corrective edit against the knowledge store.
///
/// Tagged by `action` on the wire, matching the JSON shapes the LLM is
/// instructed to emit. The tagged enum makes illegal field combinations
/// unrepresentable; validation happens once, at the parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RepairAction {
    DeleteEntity {
        name: String,
        reason: String,
    },
    DeleteRelation {
        source: String,
        target: String,
        reason: String,
    },
    MergeEntities {
        sources: BTreeSet<String>,
        target: String,
        reason: String,
    },
}

impl RepairAction {
    /// Wire name of the action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RepairAction::DeleteEntity { .. } => "delete_entity",
            RepairAction::DeleteRelation { .. } => "delete_relation",
            RepairAction::MergeEntities { .. } => "merge_entities",
        }
    }

    /// The free-text justification supplied with the action.
    pub fn reason(&self) -> &str {
        match self {
            RepairAction::DeleteEntity { reason, .. }
            | RepairAction::DeleteRelation { reason, .. }
            | RepairAction::MergeEntities { reason, .. } => reason,
        }
    }
}

/// Lifecycle of a staged repair. Approved and rejected are terminal:
/// both remove the repair from the pending map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairStatus {
    Pending,
    Approved,
    Rejected,
}

/// A repair action staged for human approval.
///
/// Serializes flat: action-specific fields plus `id`/`status`/`created_at`
/// in one JSON object, keyed by `id` in the pending-repairs document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedRepair {
    #[serde(flatten)]
    pub action: RepairAction,
    pub id: String,
    pub status: RepairStatus,
    pub created_at: DateTime<Utc>,
}

impl StagedRepair {
    /// Stage an action: assign a fresh id, pending status, and a timestamp.
    pub fn stage(action: RepairAction) -> Self {
        Self {
            action,
            id: Uuid::new_v4().to_string(),
            status: RepairStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tag_discriminates_variants() {
        let json = r#"{"action":"delete_relation","source":"A","target":"B","reason":"spurious"}"#;
        let action: RepairAction = serde_json::from_str(json).unwrap();
        assert_eq!(action.kind(), "delete_relation");
        assert_eq!(action.reason(), "spurious");
    }

    #[test]
    fn unknown_action_tag_fails_to_parse() {
        let json = r#"{"action":"rename_entity","name":"A","reason":"typo"}"#;
        assert!(serde_json::from_str::<RepairAction>(json).is_err());
    }

    #[test]
    fn staged_repair_serializes_flat() {
        let staged = StagedRepair::stage(RepairAction::DeleteEntity {
            name: "Phantom Corp".to_string(),
            reason: "no source support".to_string(),
        });
        let value = serde_json::to_value(&staged).unwrap();
        assert_eq!(value["action"], "delete_entity");
        assert_eq!(value["name"], "Phantom Corp");
        assert_eq!(value["status"], "pending");
        assert!(value["id"].is_string());
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn staged_repair_roundtrips() {
        let staged = StagedRepair::stage(RepairAction::MergeEntities {
            sources: ["A".to_string(), "B".to_string()].into_iter().collect(),
            target: "A".to_string(),
            reason: "duplicates".to_string(),
        });
        let json = serde_json::to_string(&staged).unwrap();
        let back: StagedRepair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, staged);
    }
}
