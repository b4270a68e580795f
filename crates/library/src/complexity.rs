//! Problem complexity assessment and execution-time estimation.

use std::sync::LazyLock;

use reasonforge_core::{ComplexityTier, KnowledgeContext, ReasoningPattern};
use regex_lite::Regex;

/// Words whose presence marks a problem as high complexity.
pub const COMPLEXITY_SIGNALS: &[&str] = &[
    "multiple",
    "complex",
    "comprehensive",
    "systematic",
    "advanced",
    "intricate",
    "sophisticated",
    "multifaceted",
    "interdisciplinary",
];

/// Fallback when a pattern's time estimate is missing or unparseable (15 min).
pub const DEFAULT_TIME_MS: f64 = 900_000.0;

const MS_PER_MINUTE: f64 = 60_000.0;

static TIME_ESTIMATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)(?:\s*-\s*(\d+(?:\.\d+)?))?\s*minutes?\s*$")
        .expect("time estimate regex is valid")
});

/// Classify a problem statement by length and vocabulary.
pub fn assess_problem(problem: &str) -> ComplexityTier {
    let lower = problem.to_lowercase();
    let length = problem.chars().count();

    if length > 200 || COMPLEXITY_SIGNALS.iter().any(|w| lower.contains(w)) {
        ComplexityTier::High
    } else if length > 100 {
        ComplexityTier::Medium
    } else {
        ComplexityTier::Low
    }
}

/// Complexity of applying `pattern` with the given evidence.
pub fn estimate_application(pattern: &ReasoningPattern, context: &KnowledgeContext) -> ComplexityTier {
    let steps = pattern.reasoning_steps.len();
    let evidence = context.chunk_count();
    let declared = pattern.metadata.complexity;

    if steps > 4 || evidence > 10 || declared == Some(ComplexityTier::High) {
        ComplexityTier::High
    } else if steps > 2 || evidence > 5 || declared == Some(ComplexityTier::Medium) {
        ComplexityTier::Medium
    } else {
        ComplexityTier::Low
    }
}

/// Parse `"<min>-<max> minutes"` or `"<n> minutes"` into milliseconds,
/// using the midpoint of a range.
pub fn parse_time_estimate(estimate: Option<&str>) -> f64 {
    let Some(caps) = estimate.and_then(|e| TIME_ESTIMATE.captures(e)) else {
        return DEFAULT_TIME_MS;
    };

    let low = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok());
    let high = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .or(low);

    match (low, high) {
        (Some(low), Some(high)) => (low + high) / 2.0 * MS_PER_MINUTE,
        _ => DEFAULT_TIME_MS,
    }
}

/// Estimated execution time in milliseconds, scaled by complexity.
pub fn estimate_time_ms(pattern: &ReasoningPattern, complexity: ComplexityTier) -> u64 {
    let base = parse_time_estimate(pattern.metadata.time_estimate.as_deref());
    (base * complexity.time_multiplier()).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasonforge_core::{EvidenceChunk, PatternMetadata, ReasoningStep, StepType};

    #[test]
    fn short_plain_problem_is_low() {
        let problem = "a".repeat(50);
        assert_eq!(assess_problem(&problem), ComplexityTier::Low);
    }

    #[test]
    fn mid_length_plain_problem_is_medium() {
        let problem = "b".repeat(150);
        assert_eq!(assess_problem(&problem), ComplexityTier::Medium);
    }

    #[test]
    fn long_problem_is_high() {
        let problem = "c".repeat(201);
        assert_eq!(assess_problem(&problem), ComplexityTier::High);
    }

    #[test]
    fn signal_word_forces_high() {
        assert_eq!(assess_problem("A Comprehensive review"), ComplexityTier::High);
        assert_eq!(assess_problem("comprehensive"), ComplexityTier::High);
    }

    #[test]
    fn time_estimate_range_uses_midpoint() {
        assert_eq!(parse_time_estimate(Some("15-25 minutes")), 1_200_000.0);
    }

    #[test]
    fn time_estimate_single_value() {
        assert_eq!(parse_time_estimate(Some("30 minutes")), 1_800_000.0);
        assert_eq!(parse_time_estimate(Some("1 minute")), 60_000.0);
    }

    #[test]
    fn unparseable_time_estimate_defaults() {
        assert_eq!(parse_time_estimate(Some("about an hour")), DEFAULT_TIME_MS);
        assert_eq!(parse_time_estimate(Some("2 hours")), DEFAULT_TIME_MS);
        assert_eq!(parse_time_estimate(None), DEFAULT_TIME_MS);
    }

    #[test]
    fn time_scales_with_complexity() {
        let pattern = ReasoningPattern::new("p", "P", "science")
            .with_metadata(PatternMetadata::new(ComplexityTier::Low, "15-25 minutes"));
        assert_eq!(estimate_time_ms(&pattern, ComplexityTier::Low), 840_000);
        assert_eq!(estimate_time_ms(&pattern, ComplexityTier::Medium), 1_200_000);
        assert_eq!(estimate_time_ms(&pattern, ComplexityTier::High), 1_800_000);
    }

    #[test]
    fn application_complexity_from_steps_and_evidence() {
        let mut pattern = ReasoningPattern::new("p", "P", "science")
            .with_metadata(PatternMetadata::new(ComplexityTier::Low, "10 minutes"));
        let empty = KnowledgeContext::empty("science");
        assert_eq!(estimate_application(&pattern, &empty), ComplexityTier::Low);

        for _ in 0..3 {
            pattern = pattern.with_step(ReasoningStep::new(StepType::Analysis, "s"));
        }
        assert_eq!(estimate_application(&pattern, &empty), ComplexityTier::Medium);

        let crowded = KnowledgeContext::new(
            "science",
            (0..11).map(|i| EvidenceChunk::new(format!("{i}"), 0.5)).collect(),
        );
        assert_eq!(estimate_application(&pattern, &crowded), ComplexityTier::High);
    }

    #[test]
    fn declared_high_complexity_wins() {
        let pattern = ReasoningPattern::new("p", "P", "science")
            .with_metadata(PatternMetadata::new(ComplexityTier::High, "5 minutes"));
        assert_eq!(
            estimate_application(&pattern, &KnowledgeContext::empty("science")),
            ComplexityTier::High
        );
    }
}
