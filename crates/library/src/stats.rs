//! Catalogue statistics and health.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;

/// How many of the most-used patterns the stats report lists.
pub const TOP_PATTERNS: usize = 5;

/// On-demand summary of the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total_patterns: usize,
    pub total_templates: usize,
    pub domain_distribution: BTreeMap<String, DomainCounts>,
    pub most_used_patterns: Vec<PatternUsage>,
    /// Mean success rate over all patterns, `0.0` for an empty catalogue
    pub average_success_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCounts {
    pub patterns: usize,
    pub templates: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternUsage {
    pub id: String,
    pub name: String,
    pub usage_count: u64,
    pub success_rate: f64,
}

/// Result of a health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// At least one pattern and one template are loaded
    pub healthy: bool,
    pub details: HealthDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthDetails {
    pub total_patterns: usize,
    pub total_templates: usize,
    pub domains: Vec<String>,
}

/// Compute statistics from the current catalogue contents.
pub fn compute(catalogue: &Catalogue) -> LibraryStats {
    let mut domain_distribution: BTreeMap<String, DomainCounts> = BTreeMap::new();
    for pattern in catalogue.patterns() {
        domain_distribution
            .entry(pattern.domain.clone())
            .or_default()
            .patterns += 1;
    }
    for template in catalogue.templates() {
        domain_distribution
            .entry(template.domain.clone())
            .or_default()
            .templates += 1;
    }

    // Stable sort over insertion order breaks ties deterministically.
    let mut by_usage: Vec<_> = catalogue.patterns().collect();
    by_usage.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    let most_used_patterns = by_usage
        .into_iter()
        .take(TOP_PATTERNS)
        .map(|p| PatternUsage {
            id: p.id.clone(),
            name: p.name.clone(),
            usage_count: p.usage_count,
            success_rate: p.success_rate,
        })
        .collect();

    let total_patterns = catalogue.pattern_count();
    let average_success_rate = if total_patterns == 0 {
        0.0
    } else {
        catalogue.patterns().map(|p| p.success_rate).sum::<f64>() / total_patterns as f64
    };

    LibraryStats {
        total_patterns,
        total_templates: catalogue.template_count(),
        domain_distribution,
        most_used_patterns,
        average_success_rate,
    }
}

/// Healthy when the catalogue holds at least one pattern and one template.
pub fn health(catalogue: &Catalogue) -> HealthReport {
    let total_patterns = catalogue.pattern_count();
    let total_templates = catalogue.template_count();

    let mut domains: Vec<String> = catalogue
        .patterns()
        .map(|p| p.domain.clone())
        .chain(catalogue.templates().map(|t| t.domain.clone()))
        .collect();
    domains.sort();
    domains.dedup();

    HealthReport {
        healthy: total_patterns > 0 && total_templates > 0,
        details: HealthDetails {
            total_patterns,
            total_templates,
            domains,
        },
    }
}
