//! `reasonforge apply` — Plan the application of one pattern.

use std::path::Path;

use reasonforge_config::AppConfig;

pub async fn run(
    config: &AppConfig,
    pattern_id: &str,
    problem: &str,
    domain: &str,
    evidence: Option<&Path>,
    adaptations: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let library = super::build_library(config)?;
    let context = super::load_evidence(evidence, problem, domain).await?;

    let application = library.apply_pattern(pattern_id, problem, domain, &context, adaptations)?;
    println!("{}", serde_json::to_string_pretty(&application)?);
    Ok(())
}
