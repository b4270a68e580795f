//! Application planning — turns a chosen pattern into a parameterized
//! [`PatternApplication`].
//!
//! Planning is pure. Bumping the pattern's usage count is the caller's job
//! and must happen under the same catalogue write lock as the lookup.

use reasonforge_core::{
    ApplicationContext, KnowledgeContext, PatternApplication, ReasoningPattern, ReasoningTemplate,
};

use crate::{complexity, evidence};

const HISTORY_WEIGHT: f64 = 0.5;
const EXACT_DOMAIN_BONUS: f64 = 0.2;
const GENERAL_DOMAIN_BONUS: f64 = 0.1;
const EVIDENCE_WEIGHT: f64 = 0.3;

/// Confidence in applying `pattern` to a problem in `domain`.
pub fn application_confidence(
    pattern: &ReasoningPattern,
    domain: &str,
    context: &KnowledgeContext,
) -> f64 {
    let mut confidence = HISTORY_WEIGHT * pattern.average_confidence;

    if pattern.domain == domain {
        confidence += EXACT_DOMAIN_BONUS;
    } else if pattern.is_general() {
        confidence += GENERAL_DOMAIN_BONUS;
    }

    confidence += EVIDENCE_WEIGHT * evidence::evidence_score(pattern, context);
    confidence.clamp(0.0, 1.0)
}

/// Assemble the application record.
pub fn plan(
    pattern: &ReasoningPattern,
    template: Option<&ReasoningTemplate>,
    problem: &str,
    domain: &str,
    context: &KnowledgeContext,
    adaptations: Vec<String>,
) -> PatternApplication {
    let estimated_complexity = complexity::estimate_application(pattern, context);

    let mut application = PatternApplication::new(
        pattern.id.clone(),
        ApplicationContext {
            problem: problem.to_string(),
            domain: domain.to_string(),
            knowledge: context.clone(),
        },
    );
    application.template_id = template.map(|t| t.id.clone());
    application.adaptations = adaptations;
    application.confidence = application_confidence(pattern, domain, context);
    application.estimated_complexity = estimated_complexity;
    application.estimated_time_ms = complexity::estimate_time_ms(pattern, estimated_complexity);
    application
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasonforge_core::{
        ComplexityTier, EvidenceChunk, EvidenceRequirements, GENERAL_DOMAIN, PatternMetadata,
        ReasoningStep, StepType,
    };

    fn pattern(domain: &str) -> ReasoningPattern {
        ReasoningPattern::new("p", "P", domain)
            .with_step(
                ReasoningStep::new(StepType::Analysis, "a")
                    .requiring(EvidenceRequirements::new(1, 0.5, ["science"])),
            )
            .with_history(0.8, 0.6)
            .with_metadata(PatternMetadata::new(ComplexityTier::Low, "15-25 minutes"))
    }

    fn evidence() -> KnowledgeContext {
        KnowledgeContext::new("science", vec![EvidenceChunk::new("x", 0.9)])
    }

    #[test]
    fn confidence_for_exact_domain() {
        // 0.5 * 0.6 + 0.2 + 0.3 * 1.0
        let confidence = application_confidence(&pattern("science"), "science", &evidence());
        assert!((confidence - 0.8).abs() < 1e-12);
    }

    #[test]
    fn confidence_for_general_pattern_without_evidence() {
        let confidence = application_confidence(
            &pattern(GENERAL_DOMAIN),
            "science",
            &KnowledgeContext::empty("science"),
        );
        assert!((confidence - 0.4).abs() < 1e-12);
    }

    #[test]
    fn confidence_is_clamped() {
        let mut p = pattern("science");
        p.average_confidence = 5.0;
        assert_eq!(application_confidence(&p, "science", &evidence()), 1.0);
    }

    #[test]
    fn plan_fills_every_field() {
        let template = ReasoningTemplate::new("t", "T", GENERAL_DOMAIN);
        let app = plan(
            &pattern("science"),
            Some(&template),
            "Why did the yield drop?",
            "science",
            &evidence(),
            vec!["Gather more data".into()],
        );

        assert_eq!(app.pattern_id, "p");
        assert_eq!(app.template_id.as_deref(), Some("t"));
        assert_eq!(app.adaptations, vec!["Gather more data".to_string()]);
        assert_eq!(app.estimated_complexity, ComplexityTier::Low);
        assert_eq!(app.estimated_time_ms, 840_000);
        assert_eq!(app.context.problem, "Why did the yield drop?");
        assert_eq!(app.context.knowledge.chunk_count(), 1);
    }

    #[test]
    fn plan_without_template() {
        let app = plan(&pattern("science"), None, "q", "science", &evidence(), vec![]);
        assert!(app.template_id.is_none());
    }
}
