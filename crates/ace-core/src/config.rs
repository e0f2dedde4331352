//! Loop-level configuration.
//!
//! One explicit, immutable struct handed into each component constructor.
//! There is no ambient global configuration anywhere in the workspace.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Size class of the generation model, as reported by the caller.
///
/// Small models hallucinate in characteristic ways (over-abstraction,
/// adverb stuffing, runaway entity names), so the detector runs extra
/// checks for the two smallest classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelSize {
    #[serde(rename = "1.5b")]
    Small15B,
    #[serde(rename = "3b")]
    Small3B,
    #[serde(rename = "7b")]
    Medium7B,
    #[serde(rename = "large")]
    Large,
}

impl ModelSize {
    /// Whether this size class triggers the small-model risk checks.
    pub fn is_small(self) -> bool {
        matches!(self, ModelSize::Small15B | ModelSize::Small3B)
    }
}

/// Verbosity of the reasoning instructions injected into reflection prompts.
///
/// Trades token cost against detection recall: `Minimal` favors speed on
/// large models, `Detailed` favors recall on hard cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningDepth {
    Minimal,
    Standard,
    Detailed,
}

/// Configuration for one ACE loop instance.
#[derive(Debug, Clone)]
pub struct AceConfig {
    /// Base directory for all persisted state.
    pub base_dir: PathBuf,
    /// Playbook document file name, relative to `base_dir`.
    pub playbook_file: String,
    /// Pending-repairs document file name, relative to `base_dir`.
    pub pending_repairs_file: String,
    /// How many recent lessons the playbook renders into prompts.
    pub max_history_items: usize,
    /// When true, repairs are staged for human approval instead of executed.
    pub hitl_enabled: bool,
    /// Size class of the generation model.
    pub model_size: ModelSize,
    /// Reasoning-template verbosity for reflection prompts.
    pub reasoning_depth: ReasoningDepth,
}

impl AceConfig {
    /// Config rooted at the given base directory, defaults everywhere else.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the playbook document.
    pub fn playbook_path(&self) -> PathBuf {
        self.base_dir.join(&self.playbook_file)
    }

    /// Full path of the pending-repairs document.
    pub fn pending_repairs_path(&self) -> PathBuf {
        self.base_dir.join(&self.pending_repairs_file)
    }
}

impl Default for AceConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            playbook_file: "playbook.json".to_string(),
            pending_repairs_file: "pending_repairs.json".to_string(),
            max_history_items: 10,
            hitl_enabled: false,
            model_size: ModelSize::Large,
            reasoning_depth: ReasoningDepth::Standard,
        }
    }
}
