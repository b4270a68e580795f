//! `reasonforge stats | health` — Catalogue statistics and health.

use reasonforge_config::AppConfig;

pub fn stats(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let library = super::build_library(config)?;
    let stats = library.library_stats();

    println!("📊 Pattern Library Statistics");
    println!("─────────────────────────────────────");
    println!("  Patterns:          {}", stats.total_patterns);
    println!("  Templates:         {}", stats.total_templates);
    println!("  Avg success rate:  {:.1}%", stats.average_success_rate * 100.0);

    if !stats.domain_distribution.is_empty() {
        println!();
        println!("  Domains:");
        for (domain, counts) in &stats.domain_distribution {
            println!(
                "    {domain:<14} patterns={} templates={}",
                counts.patterns, counts.templates
            );
        }
    }

    if !stats.most_used_patterns.is_empty() {
        println!();
        println!("  Most used:");
        for (i, usage) in stats.most_used_patterns.iter().enumerate() {
            println!("    {}. {} ({} uses)", i + 1, usage.id, usage.usage_count);
        }
    }

    Ok(())
}

pub fn health(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let library = super::build_library(config)?;
    let report = library.health_check();

    println!("🩺 Pattern Library Health");
    println!("─────────────────────────────────────");
    println!("  Patterns:   {}", report.details.total_patterns);
    println!("  Templates:  {}", report.details.total_templates);
    println!("  Domains:    {}", report.details.domains.join(", "));
    println!();
    if report.healthy {
        println!("  ✅ Healthy");
        Ok(())
    } else {
        println!("  ❌ Unhealthy — the catalogue needs at least one pattern and one template");
        Err("pattern library is unhealthy".into())
    }
}
