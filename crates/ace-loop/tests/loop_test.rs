//! End-to-end cycle tests with mock collaborators.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use ace_core::config::AceConfig;
use ace_core::errors::{AceError, AceResult};
use ace_core::models::{
    Chunk, Entity, GenerationOutcome, KnowledgeData, MergeStrategy, QueryOutcome, QueryParam,
    RepairAction, RepairStatus, Relationship,
};
use ace_core::traits::{KnowledgeStore, LlmClient};
use ace_loop::{AceLoop, Curator};
use ace_playbook::Playbook;

// ─── Mock collaborators ───

/// Knowledge store that serves canned data and records every mutation.
struct MockStore {
    data: KnowledgeData,
    query_error: Option<String>,
    fail_mutations: bool,
    calls: Mutex<Vec<String>>,
}

impl MockStore {
    fn with_data(data: KnowledgeData) -> Self {
        Self {
            data,
            query_error: None,
            fail_mutations: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing_queries(message: &str) -> Self {
        Self {
            data: KnowledgeData::default(),
            query_error: Some(message.to_string()),
            fail_mutations: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> AceResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_mutations {
            Err(AceError::KnowledgeStore {
                message: "mutation rejected".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KnowledgeStore for MockStore {
    async fn query_data(&self, _query: &str, _param: Option<&QueryParam>) -> QueryOutcome {
        match &self.query_error {
            Some(message) => QueryOutcome::Error {
                message: message.clone(),
            },
            None => QueryOutcome::Success {
                data: self.data.clone(),
            },
        }
    }

    async fn delete_entity(&self, name: &str) -> AceResult<()> {
        self.record(format!("delete_entity:{name}"))
    }

    async fn delete_relation(&self, source: &str, target: &str) -> AceResult<()> {
        self.record(format!("delete_relation:{source}->{target}"))
    }

    async fn merge_entities(
        &self,
        sources: &[String],
        target: &str,
        _strategy: &MergeStrategy,
    ) -> AceResult<()> {
        self.record(format!("merge_entities:{}=>{target}", sources.join("+")))
    }
}

/// LLM that replays a fixed script of responses.
struct ScriptedLlm {
    script: Mutex<VecDeque<AceResult<String>>>,
}

impl ScriptedLlm {
    fn new(responses: Vec<AceResult<String>>) -> Self {
        Self {
            script: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, _prompt: &str) -> AceResult<String> {
        self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(AceError::Llm {
                message: "script exhausted".to_string(),
            })
        })
    }
}

fn sample_data() -> KnowledgeData {
    KnowledgeData {
        entities: vec![Entity {
            name: "Albert Einstein".to_string(),
            entity_type: "person".to_string(),
            description: "German physicist who developed the theory of relativity".to_string(),
        }],
        relationships: vec![Relationship {
            source: "Albert Einstein".to_string(),
            target: "Theory of Relativity".to_string(),
            description: "developed".to_string(),
        }],
        chunks: vec![Chunk {
            content: "Albert Einstein developed the Theory of Relativity in the early 1900s."
                .to_string(),
        }],
    }
}

fn config_in(dir: &TempDir) -> AceConfig {
    AceConfig::with_base_dir(dir.path())
}

// ─── Full happy-path cycle ───

#[tokio::test]
async fn full_cycle_curates_lessons_and_executes_repairs() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let store = Arc::new(MockStore::with_data(sample_data()));
    let llm = Arc::new(ScriptedLlm::new(vec![
        Ok("Einstein developed relativity.".to_string()),
        Ok("[\"Quote the source chunk when naming people.\"]".to_string()),
        Ok(r#"```json
[{"action":"delete_relation","source":"Einstein","target":"Ghost Concept","reason":"no co-occurrence"}]
```"#
            .to_string()),
    ]));

    let mut ace = AceLoop::new(&config, store.clone(), llm);
    let report = ace.run_cycle("Who developed relativity?", None).await;

    let generation = report.generation.as_completed().expect("generation ok");
    assert!(generation.playbook_used);
    assert_eq!(
        generation.trajectory,
        vec!["retrieve", "render_playbook", "build_prompt", "llm_complete"]
    );
    assert_eq!(
        report.insights,
        vec!["Quote the source chunk when naming people.".to_string()]
    );
    assert_eq!(report.repairs.executed, 1);
    assert_eq!(report.repairs.staged, 0);
    assert_eq!(
        store.calls(),
        vec!["delete_relation:Einstein->Ghost Concept".to_string()]
    );

    // The lesson was persisted into the playbook document.
    let playbook = Playbook::load(&config);
    assert!(playbook
        .content()
        .lessons_learned
        .contains(&"Quote the source chunk when naming people.".to_string()));
}

// ─── Generation failure short-circuits the cycle ───

#[tokio::test]
async fn store_error_fails_generation_without_llm_or_mutations() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MockStore::failing_queries("vector index offline"));
    let llm = Arc::new(ScriptedLlm::new(vec![]));

    let mut ace = AceLoop::new(&config_in(&dir), store.clone(), llm);
    let report = ace.run_cycle("anything", None).await;

    match &report.generation {
        GenerationOutcome::Failed { error, details } => {
            assert_eq!(error, "knowledge store query failed");
            assert_eq!(details, "vector index offline");
        }
        GenerationOutcome::Completed(_) => panic!("generation should fail"),
    }
    assert!(report.insights.is_empty());
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn llm_failure_is_a_failed_outcome_not_a_panic() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MockStore::with_data(sample_data()));
    let llm = Arc::new(ScriptedLlm::new(vec![Err(AceError::Llm {
        message: "connection reset".to_string(),
    })]));

    let mut ace = AceLoop::new(&config_in(&dir), store, llm);
    let report = ace.run_cycle("q", None).await;

    assert!(report.generation.is_failed());
    match &report.generation {
        GenerationOutcome::Failed { error, .. } => assert_eq!(error, "LLM execution failed"),
        GenerationOutcome::Completed(_) => panic!("generation should fail"),
    }
}

// ─── Reflection degrades gracefully on non-JSON output ───

#[tokio::test]
async fn non_json_reflection_yields_one_fallback_insight() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MockStore::with_data(sample_data()));
    let llm = Arc::new(ScriptedLlm::new(vec![
        Ok("Einstein developed relativity.".to_string()),
        Ok("Well, the answer seemed fine to me overall.".to_string()),
        Ok("[]".to_string()),
    ]));

    let mut ace = AceLoop::new(&config_in(&dir), store, llm);
    let report = ace.run_cycle("q", None).await;

    assert_eq!(report.insights.len(), 1);
    assert!(report.insights[0].contains("could not be parsed"));
}

// ─── HITL staging and approval ───

#[tokio::test]
async fn hitl_stages_instead_of_executing_then_approval_executes_once() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.hitl_enabled = true;

    let store = Arc::new(MockStore::with_data(sample_data()));
    let playbook = Arc::new(Mutex::new(Playbook::load(&config)));
    let mut curator = Curator::load(&config, playbook, store.clone());

    let summary = curator
        .apply_repairs(vec![RepairAction::DeleteRelation {
            source: "A".to_string(),
            target: "B".to_string(),
            reason: "spurious".to_string(),
        }])
        .await;

    assert_eq!(summary.staged, 1);
    assert_eq!(summary.executed, 0);
    assert!(store.calls().is_empty(), "staging must not touch the store");

    let pending = curator.get_pending_repairs();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].status, RepairStatus::Pending);
    let id = pending[0].id.clone();

    curator.approve_repair(&id).await.unwrap();
    assert_eq!(store.calls(), vec!["delete_relation:A->B".to_string()]);
    assert!(curator.get_pending_repairs().is_empty());
}

#[tokio::test]
async fn reject_removes_without_executing() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.hitl_enabled = true;

    let store = Arc::new(MockStore::with_data(KnowledgeData::default()));
    let playbook = Arc::new(Mutex::new(Playbook::load(&config)));
    let mut curator = Curator::load(&config, playbook, store.clone());

    curator
        .apply_repairs(vec![RepairAction::DeleteEntity {
            name: "Ghost".to_string(),
            reason: "unsupported".to_string(),
        }])
        .await;
    let id = curator.get_pending_repairs()[0].id.clone();

    curator.reject_repair(&id).unwrap();
    assert!(curator.get_pending_repairs().is_empty());
    assert!(store.calls().is_empty());

    // Terminal states don't come back.
    assert!(matches!(
        curator.reject_repair(&id),
        Err(AceError::UnknownRepair { .. })
    ));
}

// ─── Pending queue survives process restarts ───

#[tokio::test]
async fn pending_repairs_roundtrip_through_disk() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.hitl_enabled = true;
    let store = Arc::new(MockStore::with_data(KnowledgeData::default()));

    let staged_before = {
        let playbook = Arc::new(Mutex::new(Playbook::load(&config)));
        let mut curator = Curator::load(&config, playbook, store.clone());
        curator
            .apply_repairs(vec![
                RepairAction::DeleteEntity {
                    name: "Ghost".to_string(),
                    reason: "unsupported".to_string(),
                },
                RepairAction::MergeEntities {
                    sources: ["Einstein".to_string(), "A. Einstein".to_string()]
                        .into_iter()
                        .collect(),
                    target: "Albert Einstein".to_string(),
                    reason: "duplicates".to_string(),
                },
                RepairAction::DeleteRelation {
                    source: "A".to_string(),
                    target: "B".to_string(),
                    reason: "spurious".to_string(),
                },
            ])
            .await;
        curator
            .get_pending_repairs()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    // Fresh curator, same base dir: identical queue.
    let playbook = Arc::new(Mutex::new(Playbook::load(&config)));
    let curator = Curator::load(&config, playbook, store);
    let staged_after: Vec<_> = curator.get_pending_repairs().into_iter().cloned().collect();

    assert_eq!(staged_after.len(), 3);
    assert_eq!(staged_after, staged_before);
}

#[tokio::test]
async fn corrupt_pending_file_loads_as_empty_queue() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.hitl_enabled = true;
    std::fs::write(config.pending_repairs_path(), "{not json").unwrap();

    let store = Arc::new(MockStore::with_data(KnowledgeData::default()));
    let playbook = Arc::new(Mutex::new(Playbook::load(&config)));
    let mut curator = Curator::load(&config, playbook, store.clone());
    assert!(curator.get_pending_repairs().is_empty());

    // The queue still works: stage a repair and reload it from disk.
    curator
        .apply_repairs(vec![RepairAction::DeleteEntity {
            name: "Ghost".to_string(),
            reason: "unsupported".to_string(),
        }])
        .await;

    let playbook = Arc::new(Mutex::new(Playbook::load(&config)));
    let reloaded = Curator::load(&config, playbook, store);
    assert_eq!(reloaded.get_pending_repairs().len(), 1);
}

// ─── Failed execution in a batch doesn't block siblings ───

#[tokio::test]
async fn one_bad_repair_does_not_abort_the_batch() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let mut store = MockStore::with_data(KnowledgeData::default());
    store.fail_mutations = true;
    let store = Arc::new(store);

    let playbook = Arc::new(Mutex::new(Playbook::load(&config)));
    let mut curator = Curator::load(&config, playbook, store.clone());

    let summary = curator
        .apply_repairs(vec![
            RepairAction::DeleteEntity {
                name: "X".to_string(),
                reason: "r".to_string(),
            },
            RepairAction::DeleteEntity {
                name: "Y".to_string(),
                reason: "r".to_string(),
            },
        ])
        .await;

    // Both were attempted despite both failing.
    assert_eq!(summary.failed, 2);
    assert_eq!(store.calls().len(), 2);
}

// ─── Approval failure still dequeues (documented limitation) ───

#[tokio::test]
async fn failed_approval_removes_the_repair_anyway() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.hitl_enabled = true;
    let mut store = MockStore::with_data(KnowledgeData::default());
    store.fail_mutations = true;
    let store = Arc::new(store);

    let playbook = Arc::new(Mutex::new(Playbook::load(&config)));
    let mut curator = Curator::load(&config, playbook, store);

    curator
        .apply_repairs(vec![RepairAction::DeleteEntity {
            name: "X".to_string(),
            reason: "r".to_string(),
        }])
        .await;
    let id = curator.get_pending_repairs()[0].id.clone();

    let result = curator.approve_repair(&id).await;
    assert!(result.is_err());
    assert!(curator.get_pending_repairs().is_empty());
}
