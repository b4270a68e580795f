//! The in-memory catalogue of patterns and templates.
//!
//! Every insert stores a new version of the entry. The primary map points
//! each id at its latest version, and each domain bucket appends the
//! version that was filed under it. Insertion order is remembered so
//! listings and tie-breaks are stable for the life of the process.
//!
//! Buckets are never pruned. Re-inserting an id under the same domain
//! leaves both versions in that bucket; re-inserting it under a different
//! domain leaves the previous version, old `domain` included, in the old
//! bucket. Mutations through the primary map reach every bucket slot that
//! holds the latest version.

use std::collections::HashMap;

use reasonforge_core::{ReasoningPattern, ReasoningTemplate};

/// Versioned store with an id map, a domain index, and insertion order.
#[derive(Debug, Clone)]
struct Indexed<T> {
    versions: Vec<T>,
    latest: HashMap<String, usize>,
    order: Vec<String>,
    by_domain: HashMap<String, Vec<usize>>,
}

impl<T> Default for Indexed<T> {
    fn default() -> Self {
        Self {
            versions: Vec::new(),
            latest: HashMap::new(),
            order: Vec::new(),
            by_domain: HashMap::new(),
        }
    }
}

impl<T> Indexed<T> {
    /// Insert or overwrite. Returns true if the id was already present.
    fn insert(&mut self, id: &str, domain: &str, value: T) -> bool {
        let slot = self.versions.len();
        self.versions.push(value);

        let replaced = self.latest.insert(id.to_string(), slot).is_some();
        if !replaced {
            self.order.push(id.to_string());
        }
        self.by_domain.entry(domain.to_string()).or_default().push(slot);
        replaced
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.latest.get(id).map(|&slot| &self.versions[slot])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        let slot = *self.latest.get(id)?;
        self.versions.get_mut(slot)
    }

    fn in_domain(&self, domain: &str) -> Vec<&T> {
        self.by_domain
            .get(domain)
            .map(|slots| slots.iter().map(|&slot| &self.versions[slot]).collect())
            .unwrap_or_default()
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(move |id| self.get(id))
    }

    fn len(&self) -> usize {
        self.latest.len()
    }
}

/// Patterns and templates, indexed by id and by domain.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    patterns: Indexed<ReasoningPattern>,
    templates: Indexed<ReasoningTemplate>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a pattern. Returns true if it replaced one.
    pub fn insert_pattern(&mut self, pattern: ReasoningPattern) -> bool {
        let id = pattern.id.clone();
        let domain = pattern.domain.clone();
        self.patterns.insert(&id, &domain, pattern)
    }

    /// Insert or overwrite a template. Returns true if it replaced one.
    pub fn insert_template(&mut self, template: ReasoningTemplate) -> bool {
        let id = template.id.clone();
        let domain = template.domain.clone();
        self.templates.insert(&id, &domain, template)
    }

    pub fn pattern(&self, id: &str) -> Option<&ReasoningPattern> {
        self.patterns.get(id)
    }

    pub(crate) fn pattern_mut(&mut self, id: &str) -> Option<&mut ReasoningPattern> {
        self.patterns.get_mut(id)
    }

    pub fn template(&self, id: &str) -> Option<&ReasoningTemplate> {
        self.templates.get(id)
    }

    /// Patterns filed under `domain`, empty if the domain is unknown.
    pub fn patterns_in(&self, domain: &str) -> Vec<&ReasoningPattern> {
        self.patterns.in_domain(domain)
    }

    /// Templates filed under `domain`, empty if the domain is unknown.
    pub fn templates_in(&self, domain: &str) -> Vec<&ReasoningTemplate> {
        self.templates.in_domain(domain)
    }

    /// All patterns in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = &ReasoningPattern> {
        self.patterns.iter()
    }

    /// All templates in insertion order.
    pub fn templates(&self) -> impl Iterator<Item = &ReasoningTemplate> {
        self.templates.iter()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_lookup_by_id_and_domain() {
        let mut cat = Catalogue::new();
        let pattern = ReasoningPattern::new("p1", "First", "science");
        assert!(!cat.insert_pattern(pattern.clone()));

        assert_eq!(cat.pattern("p1"), Some(&pattern));
        assert_eq!(cat.patterns_in("science").len(), 1);
        assert!(cat.patterns_in("business").is_empty());
        assert!(cat.pattern("missing").is_none());
    }

    #[test]
    fn overwrite_in_same_domain_appends_to_bucket() {
        let mut cat = Catalogue::new();
        cat.insert_pattern(ReasoningPattern::new("p1", "First", "science"));
        assert!(cat.insert_pattern(ReasoningPattern::new("p1", "Renamed", "science")));

        assert_eq!(cat.pattern_count(), 1);
        assert_eq!(cat.pattern("p1").unwrap().name, "Renamed");
        let names: Vec<&str> = cat.patterns_in("science").into_iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Renamed"]);
        assert_eq!(cat.patterns().count(), 1);
    }

    #[test]
    fn reclassified_entry_stays_in_old_bucket() {
        let mut cat = Catalogue::new();
        cat.insert_pattern(ReasoningPattern::new("p1", "First", "science"));
        cat.insert_pattern(ReasoningPattern::new("p1", "First", "business"));

        assert_eq!(cat.pattern("p1").unwrap().domain, "business");
        assert_eq!(cat.patterns_in("business").len(), 1);
        let stale = cat.patterns_in("science");
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].domain, "science");
    }

    #[test]
    fn mutation_reaches_latest_version_in_bucket() {
        let mut cat = Catalogue::new();
        cat.insert_pattern(ReasoningPattern::new("p1", "First", "science"));
        cat.insert_pattern(ReasoningPattern::new("p1", "Second", "science"));
        cat.pattern_mut("p1").unwrap().usage_count += 1;

        let counts: Vec<u64> = cat.patterns_in("science").iter().map(|p| p.usage_count).collect();
        assert_eq!(counts, vec![0, 1]);
    }

    #[test]
    fn listing_follows_insertion_order() {
        let mut cat = Catalogue::new();
        for id in ["c", "a", "b"] {
            cat.insert_template(ReasoningTemplate::new(id, id, "general"));
        }
        let ids: Vec<&str> = cat.templates().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(cat.template_count(), 3);
    }
}
