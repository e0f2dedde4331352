//! Curator — the only component with durable side effects.
//!
//! Writes lessons into the playbook and applies repair actions against the
//! knowledge store, either immediately or through a persisted
//! human-in-the-loop approval queue.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{error, info, warn};

use ace_core::config::AceConfig;
use ace_core::errors::{AceError, AceResult};
use ace_core::models::{MergeStrategy, RepairAction, StagedRepair};
use ace_core::traits::KnowledgeStore;
use ace_playbook::Playbook;

/// Counts for one `apply_repairs` batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub executed: usize,
    pub staged: usize,
    pub failed: usize,
}

/// Folds lessons into the playbook and applies or stages repairs.
///
/// The pending queue is a sidecar JSON document mapping repair id to the
/// staged repair, rewritten whole on every change. Single-writer only.
pub struct Curator {
    playbook: Arc<Mutex<Playbook>>,
    store: Arc<dyn KnowledgeStore>,
    pending: HashMap<String, StagedRepair>,
    pending_path: PathBuf,
    hitl_enabled: bool,
}

impl Curator {
    /// Construct the curator, reloading any staged repairs from disk.
    /// A missing document is an empty queue; a corrupt one is logged and
    /// replaced on the next write.
    pub fn load(
        config: &AceConfig,
        playbook: Arc<Mutex<Playbook>>,
        store: Arc<dyn KnowledgeStore>,
    ) -> Self {
        let pending_path = config.pending_repairs_path();
        let pending = match fs::read_to_string(&pending_path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, StagedRepair>>(&raw) {
                Ok(pending) => pending,
                Err(e) => {
                    warn!(path = %pending_path.display(), error = %e, "corrupt pending-repairs document, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            playbook,
            store,
            pending,
            pending_path,
            hitl_enabled: config.hitl_enabled,
        }
    }

    /// Fold insights into the playbook. Duplicates are no-ops.
    pub fn curate(&self, insights: &[String]) {
        let mut playbook = self.lock_playbook();
        for insight in insights {
            playbook.add_lesson(insight);
        }
    }

    /// Apply a batch of repairs: execute immediately, or stage for approval
    /// when HITL is enabled. One failing repair never blocks its siblings.
    pub async fn apply_repairs(&mut self, repairs: Vec<RepairAction>) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for repair in repairs {
            if self.hitl_enabled {
                let staged = StagedRepair::stage(repair);
                info!(id = %staged.id, kind = staged.action.kind(), "repair staged for approval");
                self.pending.insert(staged.id.clone(), staged);
                self.save_pending();
                summary.staged += 1;
            } else {
                match self.execute_repair(&repair).await {
                    Ok(()) => summary.executed += 1,
                    Err(e) => {
                        error!(kind = repair.kind(), error = %e, "repair execution failed");
                        summary.failed += 1;
                    }
                }
            }
        }

        summary
    }

    /// Execute a staged repair and remove it from the queue.
    ///
    /// The repair leaves the queue even when execution fails — the failure
    /// is returned so the caller can re-stage a fresh repair; there is no
    /// automatic retry path.
    pub async fn approve_repair(&mut self, id: &str) -> AceResult<()> {
        let staged = self
            .pending
            .remove(id)
            .ok_or_else(|| AceError::UnknownRepair { id: id.to_string() })?;
        self.save_pending();

        let result = self.execute_repair(&staged.action).await;
        match &result {
            Ok(()) => info!(id = %staged.id, kind = staged.action.kind(), "repair approved and executed"),
            Err(e) => {
                error!(id = %staged.id, error = %e, "approved repair failed to execute; not re-queued")
            }
        }
        result
    }

    /// Discard a staged repair without executing it.
    pub fn reject_repair(&mut self, id: &str) -> AceResult<()> {
        self.pending
            .remove(id)
            .ok_or_else(|| AceError::UnknownRepair { id: id.to_string() })?;
        self.save_pending();
        info!(id = %id, "repair rejected");
        Ok(())
    }

    /// Staged repairs, oldest first.
    pub fn get_pending_repairs(&self) -> Vec<&StagedRepair> {
        let mut repairs: Vec<&StagedRepair> = self.pending.values().collect();
        repairs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        repairs
    }

    /// Dispatch one repair to the knowledge store.
    async fn execute_repair(&self, repair: &RepairAction) -> AceResult<()> {
        match repair {
            RepairAction::DeleteEntity { name, reason } => {
                info!(%name, %reason, "deleting entity");
                self.store.delete_entity(name).await
            }
            RepairAction::DeleteRelation {
                source,
                target,
                reason,
            } => {
                info!(%source, %target, %reason, "deleting relation");
                self.store.delete_relation(source, target).await
            }
            RepairAction::MergeEntities {
                sources,
                target,
                reason,
            } => {
                info!(?sources, %target, %reason, "merging entities");
                let sources: Vec<String> = sources.iter().cloned().collect();
                // Fixed policy: concatenate descriptions, keep first type.
                self.store
                    .merge_entities(&sources, target, &MergeStrategy::default())
                    .await
            }
        }
    }

    fn lock_playbook(&self) -> MutexGuard<'_, Playbook> {
        self.playbook.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Whole-document rewrite of the pending queue. Best-effort.
    fn save_pending(&self) {
        if let Some(parent) = self.pending_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %self.pending_path.display(), error = %e, "pending-repairs dir creation failed");
                return;
            }
        }
        let json = match serde_json::to_string_pretty(&self.pending) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "pending-repairs serialization failed");
                return;
            }
        };
        if let Err(e) = fs::write(&self.pending_path, json) {
            warn!(path = %self.pending_path.display(), error = %e, "pending-repairs write failed, keeping in-memory state");
        }
    }
}
