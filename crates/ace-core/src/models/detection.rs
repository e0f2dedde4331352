use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Failure mode identified by the hallucination detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HallucinationType {
    /// Entity is an abstraction ("framework", "principle") rather than a fact.
    AbstractConcept,
    /// Relationship asserted between entities that never co-occur in sources.
    FalseRelationship,
    /// Suspiciously precise claims ("exactly 95.3%").
    OverSpecific,
    /// Entity type conflicts with its own description vocabulary.
    FalseCategory,
    /// Relationship bridges unrelated keyword domains.
    CrossDomain,
    /// Concrete entity linked to an abstract one as if equivalent.
    ConcreteAbstract,
    /// Two distinct entities asserted to be the same thing.
    FalseEquivalence,
    /// A single observation stated as a universal rule.
    OverGeneralization,
}

/// Verdict for one candidate fact. Returned, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallucinationDetection {
    /// True only when confidence clears the threshold AND at least two
    /// independent risk factors fired. A single weak signal never convicts.
    pub is_hallucinated: bool,
    /// Accumulated suspicion, clamped to [0, 1].
    pub confidence: f64,
    pub hallucination_type: Option<HallucinationType>,
    /// Best supporting/refuting source snippet, or a note that none exists.
    pub evidence: String,
    /// One line per fired check, joined for human consumption.
    pub reasoning: String,
    /// Names of the independent checks that fired.
    pub model_risk_factors: BTreeSet<String>,
}

impl HallucinationDetection {
    /// A verdict with no signals fired: not hallucinated, zero confidence.
    pub fn clean(evidence: impl Into<String>) -> Self {
        Self {
            is_hallucinated: false,
            confidence: 0.0,
            hallucination_type: None,
            evidence: evidence.into(),
            reasoning: String::new(),
            model_risk_factors: BTreeSet::new(),
        }
    }
}
