//! The pattern library — thread-safe facade over the catalogue and the
//! matching, planning and strategy operations.
//!
//! Reads take a shared lock. `add_*` and `apply_pattern` take the write
//! lock, so a usage-count bump is never lost between concurrent callers.

use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use reasonforge_core::{
    KnowledgeContext, LibraryError, PatternApplication, PatternMatchResult, ReasoningPattern,
    ReasoningTemplate,
};
use tracing::{debug, info, warn};

use crate::catalogue::Catalogue;
use crate::loader::{self, CatalogueFile, LoadSummary};
use crate::stats::{self, HealthReport, LibraryStats};
use crate::strategy::ReasoningStrategy;
use crate::{matcher, planner, seed, selector};

pub struct PatternLibrary {
    catalogue: RwLock<Catalogue>,
}

impl PatternLibrary {
    /// A library with nothing in it.
    pub fn empty() -> Self {
        Self {
            catalogue: RwLock::new(Catalogue::new()),
        }
    }

    /// A library seeded with the built-in reference catalogue.
    pub fn with_builtin_catalogue() -> Self {
        let mut catalogue = Catalogue::new();
        for pattern in seed::builtin_patterns() {
            catalogue.insert_pattern(pattern);
        }
        for template in seed::builtin_templates() {
            catalogue.insert_template(template);
        }
        info!(
            patterns = catalogue.pattern_count(),
            templates = catalogue.template_count(),
            "Pattern library initialized"
        );
        Self {
            catalogue: RwLock::new(catalogue),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalogue> {
        self.catalogue.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalogue> {
        self.catalogue.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Primary operations ────────────────────────────────────────────────

    /// Rank the catalogue's patterns for a problem.
    ///
    /// Candidates come from `domain` and `"general"`. Returns an empty list
    /// when nothing clears the confidence threshold.
    pub fn find_matching_patterns(
        &self,
        problem: &str,
        domain: &str,
        context: &KnowledgeContext,
    ) -> Vec<PatternMatchResult> {
        let matches = matcher::find_matches(&self.read(), problem, domain, context);
        debug!(domain, matches = matches.len(), "Pattern matching complete");
        matches
    }

    /// Plan the application of a pattern and record one more use of it.
    pub fn apply_pattern(
        &self,
        pattern_id: &str,
        problem: &str,
        domain: &str,
        context: &KnowledgeContext,
        adaptations: Vec<String>,
    ) -> Result<PatternApplication, LibraryError> {
        let mut catalogue = self.write();

        let application = {
            let pattern = catalogue
                .pattern(pattern_id)
                .ok_or_else(|| LibraryError::PatternNotFound {
                    pattern_id: pattern_id.to_string(),
                })?;
            let template = selector::select_template(&catalogue, pattern, problem, domain);
            planner::plan(pattern, template, problem, domain, context, adaptations)
        };

        if let Some(pattern) = catalogue.pattern_mut(pattern_id) {
            pattern.usage_count += 1;
        }

        info!(
            pattern = pattern_id,
            template = application.template_id.as_deref().unwrap_or("none"),
            confidence = application.confidence,
            complexity = %application.estimated_complexity,
            "Pattern applied"
        );
        Ok(application)
    }

    /// Build a strategy around the best match for the problem.
    pub fn generate_reasoning_strategy(
        &self,
        problem: &str,
        domain: &str,
        context: &KnowledgeContext,
    ) -> Result<ReasoningStrategy, LibraryError> {
        let catalogue = self.read();
        let best = matcher::find_matches(&catalogue, problem, domain, context)
            .into_iter()
            .next()
            .ok_or_else(|| LibraryError::NoMatchingPatterns {
                domain: domain.to_string(),
            })?;

        let template_id = selector::select_template(&catalogue, &best.pattern, problem, domain)
            .map(|t| t.id.clone());
        let strategy = ReasoningStrategy::new(best.pattern, template_id, best.confidence);

        info!(
            strategy = %strategy.name,
            confidence = strategy.confidence,
            "Reasoning strategy generated"
        );
        Ok(strategy)
    }

    // ── Catalogue mutators & queries ──────────────────────────────────────

    /// Insert or overwrite a pattern by id.
    pub fn add_pattern(&self, pattern: ReasoningPattern) {
        let id = pattern.id.clone();
        let domain = pattern.domain.clone();
        let replaced = self.write().insert_pattern(pattern);
        info!(pattern = %id, domain = %domain, replaced, "Pattern added");
    }

    /// Insert or overwrite a template by id.
    pub fn add_template(&self, template: ReasoningTemplate) {
        let id = template.id.clone();
        let domain = template.domain.clone();
        let replaced = self.write().insert_template(template);
        info!(template = %id, domain = %domain, replaced, "Template added");
    }

    pub fn get_pattern(&self, id: &str) -> Option<ReasoningPattern> {
        self.read().pattern(id).cloned()
    }

    pub fn get_template(&self, id: &str) -> Option<ReasoningTemplate> {
        self.read().template(id).cloned()
    }

    pub fn get_patterns_by_domain(&self, domain: &str) -> Vec<ReasoningPattern> {
        self.read().patterns_in(domain).into_iter().cloned().collect()
    }

    pub fn get_templates_by_domain(&self, domain: &str) -> Vec<ReasoningTemplate> {
        self.read().templates_in(domain).into_iter().cloned().collect()
    }

    /// Snapshot of every pattern, in insertion order.
    pub fn list_all_patterns(&self) -> Vec<ReasoningPattern> {
        self.read().patterns().cloned().collect()
    }

    /// Snapshot of every template, in insertion order.
    pub fn list_all_templates(&self) -> Vec<ReasoningTemplate> {
        self.read().templates().cloned().collect()
    }

    pub fn library_stats(&self) -> LibraryStats {
        stats::compute(&self.read())
    }

    pub fn health_check(&self) -> HealthReport {
        stats::health(&self.read())
    }

    /// Merge a JSON catalogue file. Entries with a blank id or domain are
    /// skipped and counted as rejected.
    pub fn load_catalogue_file(&self, path: &Path) -> Result<LoadSummary, LibraryError> {
        let file = CatalogueFile::read(path)?;
        let mut summary = LoadSummary::default();
        let mut catalogue = self.write();

        for pattern in file.patterns {
            match loader::validate_entry(&pattern.id, &pattern.domain) {
                Ok(()) => {
                    catalogue.insert_pattern(pattern);
                    summary.patterns_loaded += 1;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping pattern");
                    summary.rejected += 1;
                }
            }
        }

        for template in file.templates {
            match loader::validate_entry(&template.id, &template.domain) {
                Ok(()) => {
                    catalogue.insert_template(template);
                    summary.templates_loaded += 1;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping template");
                    summary.rejected += 1;
                }
            }
        }

        info!(
            path = %path.display(),
            patterns = summary.patterns_loaded,
            templates = summary.templates_loaded,
            rejected = summary.rejected,
            "Catalogue file loaded"
        );
        Ok(summary)
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::with_builtin_catalogue()
    }
}
