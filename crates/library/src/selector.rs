//! Template selection for a matched pattern.
//!
//! First template in the domain bucket, else first in the general bucket,
//! else none. Callers key off template identity, so the policy stays this
//! simple.

use reasonforge_core::{GENERAL_DOMAIN, ReasoningPattern, ReasoningTemplate};

use crate::catalogue::Catalogue;

/// Pick the template used to carry out `pattern` in `domain`.
///
/// `pattern` and `problem` are accepted so a richer scoring pass can be
/// added without changing callers; the current policy ignores them.
pub fn select_template<'a>(
    catalogue: &'a Catalogue,
    _pattern: &ReasoningPattern,
    _problem: &str,
    domain: &str,
) -> Option<&'a ReasoningTemplate> {
    let in_domain = catalogue.templates_in(domain);
    let candidates = if in_domain.is_empty() {
        catalogue.templates_in(GENERAL_DOMAIN)
    } else {
        in_domain
    };
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> ReasoningPattern {
        ReasoningPattern::new("p", "P", "science")
    }

    #[test]
    fn prefers_domain_template() {
        let mut cat = Catalogue::new();
        cat.insert_template(ReasoningTemplate::new("general-1", "G", GENERAL_DOMAIN));
        cat.insert_template(ReasoningTemplate::new("science-1", "S1", "science"));
        cat.insert_template(ReasoningTemplate::new("science-2", "S2", "science"));

        let selected = select_template(&cat, &pattern(), "q", "science").unwrap();
        assert_eq!(selected.id, "science-1");
    }

    #[test]
    fn falls_back_to_general() {
        let mut cat = Catalogue::new();
        cat.insert_template(ReasoningTemplate::new("general-1", "G", GENERAL_DOMAIN));

        let selected = select_template(&cat, &pattern(), "q", "business").unwrap();
        assert_eq!(selected.id, "general-1");
    }

    #[test]
    fn none_when_both_buckets_empty() {
        let mut cat = Catalogue::new();
        cat.insert_template(ReasoningTemplate::new("tech-1", "T", "technology"));
        assert!(select_template(&cat, &pattern(), "q", "science").is_none());
    }
}
