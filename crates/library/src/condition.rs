//! Trigger-condition evaluation.
//!
//! Conditions are literal checks, matched case-insensitively:
//!
//! ```text
//! domain:science                  domain == "science"
//! problem contains hypothesis     problem includes "hypothesis"
//! root cause                      problem includes "root cause"
//! ```
//!
//! No regex, no tokenization, no negation.

/// Evaluate one trigger condition against a problem and domain.
pub fn evaluate(condition: &str, problem: &str, domain: &str) -> bool {
    let condition = condition.to_lowercase();
    let problem = problem.to_lowercase();

    if let Some(expected) = condition.strip_prefix("domain:") {
        return domain == expected;
    }

    if let Some((_, needle)) = condition.split_once("contains") {
        let needle = needle.trim();
        return !needle.is_empty() && problem.contains(needle);
    }

    problem.contains(condition.as_str())
}

/// Outcome of evaluating a pattern's full trigger list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriggerOutcome<'a> {
    /// Conditions that fired, in declaration order
    pub fired: Vec<&'a str>,
    /// `fired / total`, or `0.0` when there are no conditions
    pub score: f64,
}

/// Evaluate every condition and report the satisfied fraction.
pub fn evaluate_all<'a>(conditions: &'a [String], problem: &str, domain: &str) -> TriggerOutcome<'a> {
    if conditions.is_empty() {
        return TriggerOutcome::default();
    }

    let fired: Vec<&str> = conditions
        .iter()
        .filter(|c| evaluate(c, problem, domain))
        .map(String::as_str)
        .collect();
    let score = fired.len() as f64 / conditions.len() as f64;

    TriggerOutcome { fired, score }
}

/// True if any condition fires.
pub fn any_matches(conditions: &[String], problem: &str, domain: &str) -> bool {
    conditions.iter().any(|c| evaluate(c, problem, domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_prefix_requires_exact_domain() {
        assert!(evaluate("domain:science", "anything", "science"));
        assert!(!evaluate("domain:science", "anything", "business"));
        assert!(!evaluate("domain:science", "anything", "sciences"));
    }

    #[test]
    fn domain_prefix_is_case_insensitive_on_condition() {
        assert!(evaluate("DOMAIN:science", "anything", "science"));
        assert!(evaluate("Domain:Science", "anything", "science"));
    }

    #[test]
    fn contains_clause_checks_trailing_text() {
        assert!(evaluate("problem contains hypothesis", "Test the HYPOTHESIS now", "x"));
        assert!(!evaluate("problem contains hypothesis", "Test the theory", "x"));
    }

    #[test]
    fn contains_with_empty_needle_is_false() {
        assert!(!evaluate("problem contains   ", "anything at all", "x"));
        assert!(!evaluate("contains", "contains", "x"));
    }

    #[test]
    fn contains_splits_on_first_occurrence() {
        // needle is "data contains rows"
        assert!(evaluate("text contains data contains rows", "the data contains rows", "x"));
        assert!(!evaluate("text contains data contains rows", "data rows", "x"));
    }

    #[test]
    fn literal_condition_is_substring_match() {
        assert!(evaluate("root cause", "Find the Root Cause of the outage", "x"));
        assert!(!evaluate("root cause", "Find the cause", "x"));
    }

    #[test]
    fn trigger_score_is_exact_fraction() {
        let conditions = vec![
            "domain:science".to_string(),
            "problem contains hypothesis".to_string(),
            "experiment".to_string(),
            "statistics".to_string(),
        ];
        let outcome = evaluate_all(&conditions, "Design an experiment for this hypothesis", "science");
        assert_eq!(outcome.fired.len(), 3);
        assert_eq!(outcome.score, 0.75);
    }

    #[test]
    fn empty_trigger_list_scores_zero() {
        let outcome = evaluate_all(&[], "anything", "science");
        assert_eq!(outcome.score, 0.0);
        assert!(outcome.fired.is_empty());
        assert!(!any_matches(&[], "anything", "science"));
    }
}
