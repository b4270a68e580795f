//! `reasonforge match` — Rank catalogue patterns for a problem.

use std::path::Path;

use reasonforge_config::AppConfig;

pub async fn run(
    config: &AppConfig,
    problem: &str,
    domain: &str,
    evidence: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let library = super::build_library(config)?;
    let context = super::load_evidence(evidence, problem, domain).await?;

    let matches = library.find_matching_patterns(problem, domain, &context);

    println!("🔍 Pattern matches for domain \"{domain}\"");
    println!("─────────────────────────────────────");
    println!("  Evidence fragments: {}", context.chunk_count());

    if matches.is_empty() {
        println!("\n  No pattern cleared the confidence threshold.");
        return Ok(());
    }

    for (i, m) in matches.iter().take(config.library.max_matches).enumerate() {
        println!();
        println!(
            "  {:>2}. {} ({}) — confidence {:.3}",
            i + 1,
            m.pattern.name,
            m.pattern.id,
            m.confidence
        );
        for reason in &m.match_reasons {
            println!("      ✅ {reason}");
        }
        for adaptation in &m.suggested_adaptations {
            println!("      💡 {adaptation}");
        }
    }

    if matches.len() > config.library.max_matches {
        println!(
            "\n  … {} more (raise library.max_matches to see them)",
            matches.len() - config.library.max_matches
        );
    }

    Ok(())
}
