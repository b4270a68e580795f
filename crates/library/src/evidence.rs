//! Evidence fitness — how well a knowledge context satisfies a pattern's
//! per-step evidence requirements.
//!
//! Each step scores the mean of three `[0, 1]` signals: fragment count,
//! average confidence, and domain acceptance. The pattern score is the mean
//! over its steps.

use reasonforge_core::{EvidenceRequirements, KnowledgeContext, ReasoningPattern};

/// Domain credit when the context's domain is not in the step's accepted set.
pub const OFF_DOMAIN_CREDIT: f64 = 0.5;

/// Fitness of one step's requirements against the available evidence.
pub fn step_fitness(requirements: &EvidenceRequirements, context: &KnowledgeContext) -> f64 {
    let count = count_score(requirements.min_count, context.chunk_count());
    let confidence = confidence_score(requirements.min_confidence, context.average_confidence());
    let domain = if requirements.domains.iter().any(|d| *d == context.domain) {
        1.0
    } else {
        OFF_DOMAIN_CREDIT
    };

    ((count + confidence + domain) / 3.0).clamp(0.0, 1.0)
}

/// Pattern-level evidence score: mean step fitness.
///
/// Zero when the pattern has no steps or the context holds no evidence.
pub fn evidence_score(pattern: &ReasoningPattern, context: &KnowledgeContext) -> f64 {
    if pattern.reasoning_steps.is_empty() || context.relevant_chunks.is_empty() {
        return 0.0;
    }

    let total: f64 = pattern
        .reasoning_steps
        .iter()
        .map(|step| step_fitness(&step.evidence_requirements, context))
        .sum();
    total / pattern.reasoning_steps.len() as f64
}

fn count_score(required: usize, available: usize) -> f64 {
    if required == 0 {
        return 1.0;
    }
    (available as f64 / required as f64).min(1.0)
}

fn confidence_score(required: f64, average: f64) -> f64 {
    if required <= 0.0 {
        return if average > 0.0 { 1.0 } else { 0.0 };
    }
    if average >= required {
        1.0
    } else {
        (average / required).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasonforge_core::{EvidenceChunk, ReasoningStep, StepType};

    fn context(domain: &str, confidences: &[f64]) -> KnowledgeContext {
        KnowledgeContext::new(
            domain,
            confidences
                .iter()
                .enumerate()
                .map(|(i, c)| EvidenceChunk::new(format!("chunk {i}"), *c))
                .collect(),
        )
    }

    fn pattern_with(requirements: Vec<EvidenceRequirements>) -> ReasoningPattern {
        requirements.into_iter().fold(
            ReasoningPattern::new("p", "P", "science"),
            |p, req| p.with_step(ReasoningStep::new(StepType::Analysis, "step").requiring(req)),
        )
    }

    #[test]
    fn fully_satisfied_step_scores_one() {
        let req = EvidenceRequirements::new(2, 0.7, ["science"]);
        let ctx = context("science", &[0.8, 0.9, 0.7]);
        assert!((step_fitness(&req, &ctx) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn partial_count_and_confidence() {
        // count 1/4, confidence 0.4/0.8 = 0.5, off-domain 0.5
        let req = EvidenceRequirements::new(4, 0.8, ["science"]);
        let ctx = context("business", &[0.4]);
        let expected = (0.25 + 0.5 + 0.5) / 3.0;
        assert!((step_fitness(&req, &ctx) - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_context_scores_zero_for_any_pattern_with_steps() {
        let pattern = pattern_with(vec![
            EvidenceRequirements::new(0, 0.0, ["science"]),
            EvidenceRequirements::new(3, 0.6, ["science"]),
        ]);
        assert_eq!(evidence_score(&pattern, &KnowledgeContext::empty("science")), 0.0);
    }

    #[test]
    fn stepless_pattern_scores_zero() {
        let pattern = ReasoningPattern::new("p", "P", "science");
        assert_eq!(evidence_score(&pattern, &context("science", &[0.9])), 0.0);
    }

    #[test]
    fn zero_requirements_with_zero_confidence_evidence() {
        let req = EvidenceRequirements::new(0, 0.0, Vec::<String>::new());
        let ctx = context("science", &[0.0, 0.0]);
        // count 1, confidence guarded to 0, off-domain 0.5
        assert!((step_fitness(&req, &ctx) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pattern_score_is_mean_of_steps() {
        let pattern = pattern_with(vec![
            EvidenceRequirements::new(1, 0.5, ["science"]),
            EvidenceRequirements::new(4, 0.5, ["science"]),
        ]);
        let ctx = context("science", &[0.5, 0.5]);
        // step 1: (1 + 1 + 1) / 3, step 2: (0.5 + 1 + 1) / 3
        let expected = (1.0 + 2.5 / 3.0) / 2.0;
        assert!((evidence_score(&pattern, &ctx) - expected).abs() < 1e-12);
    }
}
