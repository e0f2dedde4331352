//! Playbook — load, render, and mutate the persisted strategy memory.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, warn};

use ace_core::config::AceConfig;
use ace_core::models::PlaybookContent;

/// The evolving strategy memory.
///
/// Holds the in-memory document and its path; every mutating call rewrites
/// the whole file. Writes are best-effort: a failed write keeps the
/// in-memory state and logs a warning, it never aborts the caller. The
/// document assumes a single writer process.
#[derive(Debug)]
pub struct Playbook {
    content: PlaybookContent,
    path: PathBuf,
    max_history_items: usize,
}

impl Playbook {
    /// Load the playbook from `{base_dir}/{playbook_file}`.
    ///
    /// A missing or corrupt document falls back to built-in defaults, which
    /// are persisted immediately so the next run starts from a valid file.
    pub fn load(config: &AceConfig) -> Self {
        let path = config.playbook_path();
        let content = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<PlaybookContent>(&raw) {
                Ok(content) => {
                    debug!(path = %path.display(), version = content.version, "playbook loaded");
                    return Self {
                        content,
                        path,
                        max_history_items: config.max_history_items,
                    };
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt playbook, resetting to defaults");
                    PlaybookContent::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "no playbook on disk, creating defaults");
                PlaybookContent::default()
            }
        };

        let playbook = Self {
            content,
            path,
            max_history_items: config.max_history_items,
        };
        playbook.save();
        playbook
    }

    /// Render the playbook as the text block injected into generation
    /// prompts. Deterministic for a given content: strategies iterate in
    /// key order, lessons show the trailing `max_history_items` entries
    /// oldest first.
    pub fn render(&self) -> String {
        let mut out = String::from("## Core Directives\n");
        for directive in &self.content.core_directives {
            out.push_str("- ");
            out.push_str(directive);
            out.push('\n');
        }

        out.push_str("\n## Operational Strategies\n");
        for (name, text) in &self.content.strategies {
            out.push_str("- ");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(text);
            out.push('\n');
        }

        out.push_str("\n## Lessons Learned\n");
        let lessons = &self.content.lessons_learned;
        let start = lessons.len().saturating_sub(self.max_history_items);
        for lesson in &lessons[start..] {
            out.push_str("- ");
            out.push_str(lesson);
            out.push('\n');
        }

        out
    }

    /// Append a lesson. Exact-match duplicates are a no-op; a new lesson
    /// is appended and the document persisted.
    pub fn add_lesson(&mut self, text: &str) {
        if self.content.lessons_learned.iter().any(|l| l == text) {
            debug!("duplicate lesson ignored");
            return;
        }
        self.content.lessons_learned.push(text.to_string());
        self.touch();
        self.save();
    }

    /// Insert or replace a named strategy and persist.
    pub fn update_strategy(&mut self, name: &str, text: &str) {
        self.content
            .strategies
            .insert(name.to_string(), text.to_string());
        self.touch();
        self.save();
    }

    /// Read access for inspection and tests.
    pub fn content(&self) -> &PlaybookContent {
        &self.content
    }

    fn touch(&mut self) {
        self.content.last_updated = Utc::now().to_rfc3339();
    }

    /// Whole-document rewrite. Failure is logged and swallowed.
    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), error = %e, "playbook dir creation failed");
                return;
            }
        }
        let json = match serde_json::to_string_pretty(&self.content) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "playbook serialization failed");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "playbook write failed, keeping in-memory state");
        }
    }
}
