//! `reasonforge strategy` — Generate a strategy from the best match.

use std::path::Path;

use reasonforge_config::AppConfig;
use reasonforge_library::EchoExecutor;

pub async fn run(
    config: &AppConfig,
    problem: &str,
    domain: &str,
    evidence: Option<&Path>,
    execute: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let library = super::build_library(config)?;
    let context = super::load_evidence(evidence, problem, domain).await?;

    let strategy = library.generate_reasoning_strategy(problem, domain, &context)?;

    println!("🧭 {}", strategy.name);
    println!("─────────────────────────────────────");
    println!("  {}", strategy.description);
    println!("  Confidence: {:.3}", strategy.confidence);
    println!(
        "  Template:   {}",
        strategy.template_id.as_deref().unwrap_or("(none)")
    );
    println!(
        "  Applicable: {}",
        if strategy.is_applicable(problem, domain) { "yes" } else { "no" }
    );

    if execute {
        let output = strategy.apply(&EchoExecutor, problem, &context).await?;
        println!();
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
