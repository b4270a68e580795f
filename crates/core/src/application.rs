//! Ephemeral records produced by matching and application calls.
//!
//! Neither record is persisted by the engine. A caller may store a
//! [`PatternApplication`]; its `id` and `applied_at` exist for that purpose.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::knowledge::KnowledgeContext;
use crate::pattern::{ComplexityTier, ReasoningPattern};

/// One ranked candidate from a matching call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatchResult {
    pub pattern: ReasoningPattern,

    /// Weighted confidence in `(0.3, 1.0]` for any returned match
    pub confidence: f64,

    /// Diagnostic explanations of what contributed
    pub match_reasons: Vec<String>,

    /// Diagnostic suggestions for improving the fit
    pub suggested_adaptations: Vec<String>,

    /// Weighted contribution of each signal
    pub breakdown: ScoreBreakdown,
}

/// Per-signal contributions to a match confidence, already weighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub trigger_score: f64,
    pub domain_score: f64,
    pub evidence_score: f64,
    pub success_score: f64,
    pub complexity_bonus: f64,
}

impl ScoreBreakdown {
    /// Sum of all contributions, before clamping.
    pub fn total(&self) -> f64 {
        self.trigger_score
            + self.domain_score
            + self.evidence_score
            + self.success_score
            + self.complexity_bonus
    }
}

/// The inputs a pattern was applied against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationContext {
    pub problem: String,
    pub domain: String,
    pub knowledge: KnowledgeContext,
}

/// A concrete, parameterized plan for applying one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternApplication {
    pub id: String,
    pub pattern_id: String,

    /// `None` when no template exists for the domain or `"general"`
    pub template_id: Option<String>,

    pub context: ApplicationContext,

    #[serde(default)]
    pub adaptations: Vec<String>,

    pub confidence: f64,
    pub estimated_complexity: ComplexityTier,

    /// Estimated execution time in milliseconds
    pub estimated_time_ms: u64,

    pub applied_at: DateTime<Utc>,
}

impl PatternApplication {
    /// Start a record with a fresh id and timestamp.
    pub fn new(pattern_id: impl Into<String>, context: ApplicationContext) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pattern_id: pattern_id.into(),
            template_id: None,
            context,
            adaptations: Vec::new(),
            confidence: 0.0,
            estimated_complexity: ComplexityTier::default(),
            estimated_time_ms: 0,
            applied_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_total_sums_contributions() {
        let breakdown = ScoreBreakdown {
            trigger_score: 0.4,
            domain_score: 0.3,
            evidence_score: 0.1,
            success_score: 0.08,
            complexity_bonus: 0.05,
        };
        assert!((breakdown.total() - 0.93).abs() < 1e-12);
    }

    #[test]
    fn new_application_gets_unique_id() {
        let ctx = ApplicationContext {
            problem: "p".into(),
            domain: "science".into(),
            knowledge: KnowledgeContext::empty("science"),
        };
        let a = PatternApplication::new("x", ctx.clone());
        let b = PatternApplication::new("x", ctx);
        assert_ne!(a.id, b.id);
        assert!(a.template_id.is_none());
    }
}
