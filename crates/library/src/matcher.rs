//! Pattern matching — ranks candidate patterns for a problem.
//!
//! Confidence is a fixed weighted sum:
//!
//! | Signal | Weight |
//! |---|---|
//! | fraction of trigger conditions satisfied | 0.4 |
//! | exact domain match / general pattern | 0.3 / 0.1 |
//! | evidence fitness | 0.2 |
//! | historical success rate | 0.1 |
//! | problem complexity within one tier of the pattern's | +0.05 |
//!
//! The sum is capped at 1.0 and candidates at or below [`MATCH_THRESHOLD`]
//! are dropped.

use reasonforge_core::{
    ComplexityTier, GENERAL_DOMAIN, KnowledgeContext, PatternMatchResult, ReasoningPattern,
    ScoreBreakdown,
};
use tracing::debug;

use crate::catalogue::Catalogue;
use crate::{complexity, condition, evidence};

/// Candidates must score strictly above this to be returned.
pub const MATCH_THRESHOLD: f64 = 0.3;

const TRIGGER_WEIGHT: f64 = 0.4;
const EXACT_DOMAIN_BONUS: f64 = 0.3;
const GENERAL_DOMAIN_BONUS: f64 = 0.1;
const EVIDENCE_WEIGHT: f64 = 0.2;
const SUCCESS_WEIGHT: f64 = 0.1;
const COMPLEXITY_FIT_BONUS: f64 = 0.05;

const HIGH_SUCCESS_RATE: f64 = 0.8;
const STRONG_EVIDENCE: f64 = 0.7;
const WEAK_EVIDENCE: f64 = 0.5;

/// Domain bucket followed by the general bucket. A pattern filed under
/// both appears twice.
pub fn candidates<'a>(catalogue: &'a Catalogue, domain: &str) -> Vec<&'a ReasoningPattern> {
    let mut candidates = catalogue.patterns_in(domain);
    candidates.extend(catalogue.patterns_in(GENERAL_DOMAIN));
    candidates
}

/// Score, filter, and rank every candidate for the problem.
pub fn find_matches(
    catalogue: &Catalogue,
    problem: &str,
    domain: &str,
    context: &KnowledgeContext,
) -> Vec<PatternMatchResult> {
    let problem_complexity = complexity::assess_problem(problem);

    let mut matches: Vec<PatternMatchResult> = candidates(catalogue, domain)
        .into_iter()
        .map(|pattern| score_candidate(pattern, problem, domain, context, problem_complexity))
        .inspect(|m| {
            debug!(
                pattern = %m.pattern.id,
                confidence = m.confidence,
                "Scored candidate pattern"
            );
        })
        .filter(|m| m.confidence > MATCH_THRESHOLD)
        .collect();

    // sort_by is stable: ties keep candidate order
    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    matches
}

/// Weighted confidence and diagnostics for a single candidate.
pub fn score_candidate(
    pattern: &ReasoningPattern,
    problem: &str,
    domain: &str,
    context: &KnowledgeContext,
    problem_complexity: ComplexityTier,
) -> PatternMatchResult {
    let triggers = condition::evaluate_all(&pattern.trigger_conditions, problem, domain);
    let evidence = evidence::evidence_score(pattern, context);
    let declared = pattern.declared_complexity();
    let complexity_fits = problem_complexity.is_within_one_of(declared);

    let domain_score = if pattern.domain == domain {
        EXACT_DOMAIN_BONUS
    } else if pattern.is_general() {
        GENERAL_DOMAIN_BONUS
    } else {
        0.0
    };

    let breakdown = ScoreBreakdown {
        trigger_score: TRIGGER_WEIGHT * triggers.score,
        domain_score,
        evidence_score: EVIDENCE_WEIGHT * evidence,
        success_score: SUCCESS_WEIGHT * pattern.success_rate,
        complexity_bonus: if complexity_fits { COMPLEXITY_FIT_BONUS } else { 0.0 },
    };
    let confidence = breakdown.total().clamp(0.0, 1.0);

    let mut match_reasons: Vec<String> = triggers
        .fired
        .iter()
        .map(|c| format!("Trigger condition met: {c}"))
        .collect();

    if pattern.domain == domain {
        match_reasons.push(format!("Exact domain match: {domain}"));
    } else if pattern.is_general() {
        match_reasons.push("General pattern applicable across domains".to_string());
    }

    if evidence >= STRONG_EVIDENCE {
        match_reasons.push(format!("Strong evidence support ({:.0}%)", evidence * 100.0));
    } else if evidence >= WEAK_EVIDENCE {
        match_reasons.push(format!("Adequate evidence support ({:.0}%)", evidence * 100.0));
    }

    if pattern.success_rate > HIGH_SUCCESS_RATE {
        match_reasons.push(format!(
            "High historical success rate ({:.0}%)",
            pattern.success_rate * 100.0
        ));
    }

    if complexity_fits {
        match_reasons.push(format!(
            "Complexity fit: problem is {problem_complexity}, pattern is {declared}"
        ));
    }

    // one suggestion at most; weak evidence takes precedence
    let mut suggested_adaptations = Vec::new();
    if evidence < WEAK_EVIDENCE {
        suggested_adaptations
            .push("Gather additional evidence before applying this pattern".to_string());
    } else if problem_complexity != declared {
        suggested_adaptations.push(format!(
            "Adjust reasoning depth: problem is {problem_complexity} complexity, pattern targets {declared}"
        ));
    }

    PatternMatchResult {
        pattern: pattern.clone(),
        confidence,
        match_reasons,
        suggested_adaptations,
        breakdown,
    }
}
