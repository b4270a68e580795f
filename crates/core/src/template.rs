//! Reasoning templates — step skeletons that describe *how* a matched
//! pattern is carried out.
//!
//! Variations are descriptive payloads. Nothing in the engine applies them
//! automatically; a caller may inspect them and rewrite the step list.

use serde::{Deserialize, Serialize};

use crate::pattern::{ComplexityTier, StepType};

/// A reusable template, independent of any single pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningTemplate {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub domain: String,

    #[serde(default)]
    pub applicability: TemplateApplicability,

    /// Ordered by `order`; gaps and fractional orders are legal
    #[serde(default)]
    pub steps: Vec<TemplateStep>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<TemplateVariation>,
}

impl ReasoningTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            domain: domain.into(),
            applicability: TemplateApplicability::default(),
            steps: Vec::new(),
            variations: Vec::new(),
        }
    }

    /// Steps sorted by their `order` key.
    pub fn ordered_steps(&self) -> Vec<&TemplateStep> {
        let mut steps: Vec<&TemplateStep> = self.steps.iter().collect();
        steps.sort_by(|a, b| a.order.total_cmp(&b.order));
        steps
    }
}

/// When a template is a sensible choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateApplicability {
    #[serde(default)]
    pub problem_types: Vec<String>,

    #[serde(default)]
    pub domains: Vec<String>,

    #[serde(default)]
    pub complexity: ComplexityTier,

    #[serde(default)]
    pub min_evidence_count: usize,

    #[serde(default)]
    pub min_evidence_confidence: f64,
}

/// One step skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateStep {
    /// Position key; `1.5` inserts between `1` and `2`
    pub order: f64,

    #[serde(rename = "type")]
    pub step_type: StepType,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub inputs: Vec<String>,

    #[serde(default)]
    pub processes: Vec<String>,

    #[serde(default)]
    pub outputs: Vec<String>,

    #[serde(default)]
    pub verification: VerificationCriteria,

    #[serde(default = "default_adaptable")]
    pub adaptable: bool,
}

fn default_adaptable() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationCriteria {
    #[serde(default)]
    pub criteria: Vec<String>,

    #[serde(default)]
    pub min_confidence: f64,
}

/// A named alternative configuration of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVariation {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Trigger conditions, same grammar as pattern triggers
    #[serde(default)]
    pub conditions: Vec<String>,

    #[serde(default)]
    pub modifications: Vec<StepModification>,
}

/// A change a variation describes against the base step list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepModification {
    /// Replace the step order with the given sequence of order keys
    Reorder { order: Vec<f64> },
    /// Insert a new step at its own `order`
    InsertStep { step: TemplateStep },
    /// Drop the step with this order key
    RemoveStep { order: f64 },
    /// Tune a named parameter of the step at `order`
    AdjustParameter {
        order: f64,
        parameter: String,
        value: serde_json::Value,
    },
}
