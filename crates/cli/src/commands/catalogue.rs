//! `reasonforge patterns | templates | show` — Catalogue queries.

use reasonforge_config::AppConfig;

pub fn patterns(config: &AppConfig, domain: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let library = super::build_library(config)?;
    let patterns = match domain {
        Some(domain) => library.get_patterns_by_domain(domain),
        None => library.list_all_patterns(),
    };

    if patterns.is_empty() {
        println!("No patterns found.");
        return Ok(());
    }

    println!("{:<34} {:<12} {:>8} {:>8} {:>6}", "Pattern", "Domain", "Success", "AvgConf", "Steps");
    println!("{:<34} {:<12} {:>8} {:>8} {:>6}", "───────", "──────", "───────", "───────", "─────");
    for p in &patterns {
        println!(
            "{:<34} {:<12} {:>7.0}% {:>8.2} {:>6}",
            p.id,
            p.domain,
            p.success_rate * 100.0,
            p.average_confidence,
            p.reasoning_steps.len()
        );
    }
    Ok(())
}

pub fn templates(config: &AppConfig, domain: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let library = super::build_library(config)?;
    let templates = match domain {
        Some(domain) => library.get_templates_by_domain(domain),
        None => library.list_all_templates(),
    };

    if templates.is_empty() {
        println!("No templates found.");
        return Ok(());
    }

    for t in &templates {
        println!("  {} [{}] — {} steps, {} variations", t.id, t.domain, t.steps.len(), t.variations.len());
        for step in t.ordered_steps() {
            println!("     {:>4}. {} ({})", step.order, step.name, step.step_type);
        }
    }
    Ok(())
}

pub fn show(config: &AppConfig, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let library = super::build_library(config)?;

    if let Some(pattern) = library.get_pattern(id) {
        println!("{}", serde_json::to_string_pretty(&pattern)?);
    } else if let Some(template) = library.get_template(id) {
        println!("{}", serde_json::to_string_pretty(&template)?);
    } else {
        return Err(format!("No pattern or template with id '{id}'").into());
    }
    Ok(())
}
