//! Reasoning patterns — named, domain-tagged decision rules.
//!
//! A pattern declares the trigger conditions under which it applies, the
//! ordered reasoning steps it prescribes, and the evidence each step needs.
//! Historical signals (`success_rate`, `average_confidence`) are maintained
//! outside this crate and only read during scoring.

use serde::{Deserialize, Serialize};

/// The wildcard domain. Patterns and templates filed here apply everywhere.
pub const GENERAL_DOMAIN: &str = "general";

/// A reusable reasoning pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningPattern {
    /// Unique key across the catalogue
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// What the pattern does
    #[serde(default)]
    pub description: String,

    /// Domain tag (`"general"` matches every domain)
    pub domain: String,

    /// Literal substring/equality checks, evaluated in order
    #[serde(default)]
    pub trigger_conditions: Vec<String>,

    /// Ordered reasoning steps
    #[serde(default)]
    pub reasoning_steps: Vec<ReasoningStep>,

    /// Descriptive only; never scored
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expected_outcomes: Vec<String>,

    /// Number of times the pattern has been applied
    #[serde(default)]
    pub usage_count: u64,

    /// Historical success rate in `[0, 1]`
    #[serde(default)]
    pub success_rate: f64,

    /// Historical average confidence in `[0, 1]`
    #[serde(default)]
    pub average_confidence: f64,

    #[serde(default)]
    pub metadata: PatternMetadata,
}

impl ReasoningPattern {
    /// Create a pattern with no triggers, steps, or history.
    pub fn new(id: impl Into<String>, name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            domain: domain.into(),
            trigger_conditions: Vec::new(),
            reasoning_steps: Vec::new(),
            expected_outcomes: Vec::new(),
            usage_count: 0,
            success_rate: 0.0,
            average_confidence: 0.0,
            metadata: PatternMetadata::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trigger_conditions = triggers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_step(mut self, step: ReasoningStep) -> Self {
        self.reasoning_steps.push(step);
        self
    }

    pub fn with_history(mut self, success_rate: f64, average_confidence: f64) -> Self {
        self.success_rate = success_rate;
        self.average_confidence = average_confidence;
        self
    }

    pub fn with_metadata(mut self, metadata: PatternMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether this pattern is filed under the wildcard domain.
    pub fn is_general(&self) -> bool {
        self.domain == GENERAL_DOMAIN
    }

    /// Declared complexity, `medium` when the metadata omits it.
    pub fn declared_complexity(&self) -> ComplexityTier {
        self.metadata.complexity.unwrap_or_default()
    }
}

/// The kind of work a reasoning step performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    Analysis,
    Synthesis,
    Evaluation,
    Application,
}

impl std::fmt::Display for StepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis => write!(f, "analysis"),
            Self::Synthesis => write!(f, "synthesis"),
            Self::Evaluation => write!(f, "evaluation"),
            Self::Application => write!(f, "application"),
        }
    }
}

/// One step of a reasoning pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStep {
    #[serde(rename = "type")]
    pub step_type: StepType,

    pub description: String,

    #[serde(default)]
    pub evidence_requirements: EvidenceRequirements,
}

impl ReasoningStep {
    pub fn new(step_type: StepType, description: impl Into<String>) -> Self {
        Self {
            step_type,
            description: description.into(),
            evidence_requirements: EvidenceRequirements::default(),
        }
    }

    pub fn requiring(mut self, requirements: EvidenceRequirements) -> Self {
        self.evidence_requirements = requirements;
        self
    }
}

/// Evidence a step needs before it can be carried out with confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRequirements {
    /// Minimum number of evidence fragments
    #[serde(default)]
    pub min_count: usize,

    /// Minimum average fragment confidence
    #[serde(default)]
    pub min_confidence: f64,

    /// Domains whose evidence is accepted at full credit
    #[serde(default)]
    pub domains: Vec<String>,
}

impl EvidenceRequirements {
    pub fn new<I, S>(min_count: usize, min_confidence: f64, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            min_count,
            min_confidence,
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered complexity tiers: `low < medium < high`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    Low,
    #[default]
    Medium,
    High,
}

impl ComplexityTier {
    /// Position in the tier ordering.
    pub fn index(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// True when the two tiers differ by at most one step.
    pub fn is_within_one_of(self, other: ComplexityTier) -> bool {
        self.index().abs_diff(other.index()) <= 1
    }

    /// Execution-time scale factor for this tier.
    pub fn time_multiplier(self) -> f64 {
        match self {
            Self::Low => 0.7,
            Self::Medium => 1.0,
            Self::High => 1.5,
        }
    }
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Typed pattern metadata with an open extension map for anything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<ComplexityTier>,

    /// Human-readable estimate such as `"15-25 minutes"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Unvalidated extra fields, preserved verbatim
    #[serde(default, flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PatternMetadata {
    pub fn new(complexity: ComplexityTier, time_estimate: impl Into<String>) -> Self {
        Self {
            complexity: Some(complexity),
            time_estimate: Some(time_estimate.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_tiers_are_ordered() {
        assert!(ComplexityTier::Low < ComplexityTier::Medium);
        assert!(ComplexityTier::Medium < ComplexityTier::High);
        assert!(ComplexityTier::Low.is_within_one_of(ComplexityTier::Medium));
        assert!(!ComplexityTier::Low.is_within_one_of(ComplexityTier::High));
        assert!(ComplexityTier::High.is_within_one_of(ComplexityTier::High));
    }

    #[test]
    fn missing_complexity_defaults_to_medium() {
        let pattern = ReasoningPattern::new("p", "P", "science");
        assert_eq!(pattern.declared_complexity(), ComplexityTier::Medium);
    }

    #[test]
    fn pattern_json_uses_type_key_for_steps() {
        let pattern = ReasoningPattern::new("p", "P", "science")
            .with_step(ReasoningStep::new(StepType::Analysis, "Look closely"));
        let json = serde_json::to_string(&pattern).unwrap();
        assert!(json.contains("\"type\":\"analysis\""));

        let parsed: ReasoningPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pattern);
    }

    #[test]
    fn metadata_keeps_unknown_fields() {
        let json = r#"{"complexity":"high","time_estimate":"30 minutes","reviewed_by":"ops"}"#;
        let meta: PatternMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.complexity, Some(ComplexityTier::High));
        assert_eq!(meta.extra["reviewed_by"], "ops");
    }
}
