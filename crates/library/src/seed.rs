//! Built-in reference catalogue.
//!
//! Two patterns each for `science`, `business` and `technology`, plus one
//! general analytical template with two variations.

use reasonforge_core::{
    ComplexityTier, EvidenceRequirements, GENERAL_DOMAIN, PatternMetadata, ReasoningPattern,
    ReasoningStep, ReasoningTemplate, StepModification, StepType, TemplateApplicability,
    TemplateStep, TemplateVariation, VerificationCriteria,
};

fn metadata(complexity: ComplexityTier, time_estimate: &str) -> PatternMetadata {
    PatternMetadata {
        author: Some("reasonforge".into()),
        version: Some("1.0".into()),
        ..PatternMetadata::new(complexity, time_estimate)
    }
}

fn step(step_type: StepType, description: &str, min_count: usize, min_confidence: f64, domains: &[&str]) -> ReasoningStep {
    ReasoningStep::new(step_type, description).requiring(EvidenceRequirements::new(
        min_count,
        min_confidence,
        domains.iter().copied(),
    ))
}

/// The six reference patterns.
pub fn builtin_patterns() -> Vec<ReasoningPattern> {
    vec![
        ReasoningPattern::new("scientific-hypothesis-testing", "Scientific Hypothesis Testing", "science")
            .with_description("Formulate a testable hypothesis, design a test, and evaluate the outcome against evidence")
            .with_triggers([
                "domain:science",
                "problem contains hypothesis",
                "experiment",
                "test",
            ])
            .with_step(step(StepType::Analysis, "Identify the claim and restate it as a falsifiable hypothesis", 2, 0.6, &["science", "research"]))
            .with_step(step(StepType::Synthesis, "Design an experiment or observation that could refute it", 3, 0.7, &["science"]))
            .with_step(step(StepType::Evaluation, "Compare predicted and observed outcomes", 3, 0.75, &["science"]))
            .with_step(step(StepType::Application, "State the conclusion and its limits", 1, 0.6, &["science", "general"]))
            .with_history(0.85, 0.82)
            .with_metadata(metadata(ComplexityTier::High, "20-30 minutes")),
        ReasoningPattern::new("causal-mechanism-analysis", "Causal Mechanism Analysis", "science")
            .with_description("Trace an observed effect back through candidate mechanisms")
            .with_triggers([
                "domain:science",
                "problem contains cause",
                "mechanism",
                "why",
            ])
            .with_step(step(StepType::Analysis, "Describe the observed effect precisely", 1, 0.6, &["science"]))
            .with_step(step(StepType::Synthesis, "Enumerate candidate mechanisms", 2, 0.65, &["science", "research"]))
            .with_step(step(StepType::Evaluation, "Rank mechanisms by explanatory power", 3, 0.7, &["science"]))
            .with_history(0.78, 0.75)
            .with_metadata(metadata(ComplexityTier::Medium, "15-25 minutes")),
        ReasoningPattern::new("strategic-swot-analysis", "Strategic SWOT Analysis", "business")
            .with_description("Assess strengths, weaknesses, opportunities and threats to frame a strategic decision")
            .with_triggers([
                "domain:business",
                "problem contains strategy",
                "market",
                "competitor",
            ])
            .with_step(step(StepType::Analysis, "Catalogue internal strengths and weaknesses", 2, 0.6, &["business"]))
            .with_step(step(StepType::Analysis, "Catalogue external opportunities and threats", 2, 0.6, &["business", "economics"]))
            .with_step(step(StepType::Synthesis, "Cross the quadrants into candidate strategies", 2, 0.65, &["business"]))
            .with_history(0.8, 0.78)
            .with_metadata(metadata(ComplexityTier::Medium, "15-25 minutes")),
        ReasoningPattern::new("cost-benefit-evaluation", "Cost-Benefit Evaluation", "business")
            .with_description("Quantify costs and benefits of alternatives and compare on a common scale")
            .with_triggers([
                "domain:business",
                "problem contains cost",
                "benefit",
                "invest",
            ])
            .with_step(step(StepType::Analysis, "List alternatives and their cost drivers", 2, 0.65, &["business", "finance"]))
            .with_step(step(StepType::Evaluation, "Estimate benefits and discount to present value", 3, 0.7, &["business", "finance"]))
            .with_history(0.82, 0.8)
            .with_metadata(metadata(ComplexityTier::Low, "10 minutes")),
        ReasoningPattern::new("root-cause-analysis", "Root Cause Analysis", "technology")
            .with_description("Work backwards from a failure to the underlying defect")
            .with_triggers([
                "domain:technology",
                "problem contains failure",
                "bug",
                "outage",
                "error",
            ])
            .with_step(step(StepType::Analysis, "Reconstruct the failure timeline", 2, 0.7, &["technology"]))
            .with_step(step(StepType::Analysis, "Ask why repeatedly until a fixable cause appears", 2, 0.65, &["technology"]))
            .with_step(step(StepType::Evaluation, "Confirm the cause reproduces the failure", 3, 0.75, &["technology"]))
            .with_step(step(StepType::Application, "Propose a fix and a regression guard", 1, 0.7, &["technology"]))
            .with_step(step(StepType::Evaluation, "Check the fix against the original symptoms", 2, 0.7, &["technology"]))
            .with_history(0.88, 0.84)
            .with_metadata(metadata(ComplexityTier::High, "25-40 minutes")),
        ReasoningPattern::new("architecture-tradeoff-analysis", "Architecture Trade-off Analysis", "technology")
            .with_description("Compare design options against explicit quality attributes")
            .with_triggers([
                "domain:technology",
                "problem contains architecture",
                "design",
                "scalab",
            ])
            .with_step(step(StepType::Analysis, "Identify the quality attributes that matter", 2, 0.6, &["technology"]))
            .with_step(step(StepType::Synthesis, "Sketch candidate designs", 2, 0.6, &["technology"]))
            .with_step(step(StepType::Evaluation, "Score each design per attribute and name the trade-offs", 3, 0.7, &["technology", "business"]))
            .with_history(0.76, 0.74)
            .with_metadata(metadata(ComplexityTier::Medium, "30 minutes")),
    ]
}

fn template_step(order: f64, step_type: StepType, name: &str, min_confidence: f64) -> TemplateStep {
    TemplateStep {
        order,
        step_type,
        name: name.into(),
        inputs: vec!["problem statement".into(), "evidence".into()],
        processes: vec![name.to_lowercase()],
        outputs: vec![format!("{} result", name.to_lowercase())],
        verification: VerificationCriteria {
            criteria: vec![format!("{name} is supported by cited evidence")],
            min_confidence,
        },
        adaptable: true,
    }
}

/// The general analytical template.
pub fn builtin_templates() -> Vec<ReasoningTemplate> {
    let mut template = ReasoningTemplate::new(
        "general-analytical-template",
        "General Analytical Template",
        GENERAL_DOMAIN,
    );
    template.description =
        "Analyse, synthesise, evaluate and apply: a domain-neutral skeleton for any pattern".into();
    template.applicability = TemplateApplicability {
        problem_types: vec!["analytical".into(), "decision".into(), "diagnostic".into()],
        domains: vec![GENERAL_DOMAIN.into()],
        complexity: ComplexityTier::Medium,
        min_evidence_count: 2,
        min_evidence_confidence: 0.6,
    };
    template.steps = vec![
        template_step(1.0, StepType::Analysis, "Decompose the problem", 0.6),
        template_step(2.0, StepType::Synthesis, "Combine findings", 0.65),
        template_step(3.0, StepType::Evaluation, "Evaluate conclusions", 0.7),
        template_step(4.0, StepType::Application, "Apply recommendations", 0.7),
    ];
    template.variations = vec![
        TemplateVariation {
            name: "evidence-scarce".into(),
            description: "Insert an explicit evidence-gathering step when support is thin".into(),
            conditions: vec!["problem contains uncertain".into(), "limited data".into()],
            modifications: vec![StepModification::InsertStep {
                step: template_step(1.5, StepType::Analysis, "Gather supplementary evidence", 0.5),
            }],
        },
        TemplateVariation {
            name: "time-constrained".into(),
            description: "Drop the separate application step and relax verification".into(),
            conditions: vec!["urgent".into(), "problem contains deadline".into()],
            modifications: vec![
                StepModification::RemoveStep { order: 4.0 },
                StepModification::AdjustParameter {
                    order: 3.0,
                    parameter: "min_confidence".into(),
                    value: serde_json::json!(0.6),
                },
            ],
        },
    ];

    vec![template]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn three_domains_two_patterns_each() {
        let patterns = builtin_patterns();
        let mut per_domain: HashMap<&str, usize> = HashMap::new();
        for p in &patterns {
            *per_domain.entry(p.domain.as_str()).or_default() += 1;
        }
        assert_eq!(per_domain.len(), 3);
        assert!(per_domain.values().all(|n| *n == 2));
    }

    #[test]
    fn ids_are_unique_and_steps_present() {
        let patterns = builtin_patterns();
        let ids: HashSet<&str> = patterns.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), patterns.len());
        assert!(patterns.iter().all(|p| !p.reasoning_steps.is_empty()));
        assert!(patterns.iter().all(|p| !p.trigger_conditions.is_empty()));
    }

    #[test]
    fn general_template_has_two_variations() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].domain, GENERAL_DOMAIN);
        assert_eq!(templates[0].variations.len(), 2);
    }
}
