//! ReasonForge CLI — the main entry point.
//!
//! Commands:
//! - `match`     — Rank catalogue patterns for a problem
//! - `apply`     — Plan the application of one pattern
//! - `strategy`  — Generate (and optionally run) a strategy from the best match
//! - `patterns`  — List patterns, optionally by domain
//! - `templates` — List templates, optionally by domain
//! - `show`      — Print one pattern or template as JSON
//! - `stats`     — Catalogue statistics
//! - `health`    — Catalogue health check
//! - `config`    — Show, locate, or validate configuration

use clap::{Parser, Subcommand};
use reasonforge_config::AppConfig;
use tracing::info;

mod commands;

#[derive(Parser)]
#[command(
    name = "reasonforge",
    about = "ReasonForge — reasoning pattern matching and application planning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalogue patterns for a problem
    Match {
        /// Problem statement
        #[arg(short, long)]
        problem: String,

        /// Knowledge domain
        #[arg(short, long, default_value = "general")]
        domain: String,

        /// JSON file with evidence (a context object or an array of chunks)
        #[arg(short, long)]
        evidence: Option<std::path::PathBuf>,
    },

    /// Plan the application of a pattern
    Apply {
        /// Pattern id
        pattern_id: String,

        #[arg(short, long)]
        problem: String,

        #[arg(short, long, default_value = "general")]
        domain: String,

        #[arg(short, long)]
        evidence: Option<std::path::PathBuf>,

        /// Adaptation notes to attach (repeatable)
        #[arg(short, long = "adapt")]
        adaptations: Vec<String>,
    },

    /// Generate a strategy from the best-matching pattern
    Strategy {
        #[arg(short, long)]
        problem: String,

        #[arg(short, long, default_value = "general")]
        domain: String,

        #[arg(short, long)]
        evidence: Option<std::path::PathBuf>,

        /// Run the strategy through the echo executor
        #[arg(long)]
        run: bool,
    },

    /// List patterns
    Patterns {
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// List templates
    Templates {
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Print a pattern or template by id
    Show { id: String },

    /// Show catalogue statistics
    Stats,

    /// Check catalogue health
    Health,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = AppConfig::config_path();
    let config = AppConfig::load()
        .map_err(|e| format!("Failed to load config: {e}"))?;
    commands::init_tracing(&config, cli.verbose);

    info!(path = %config_path.display(), "{}", commands::config_source(&config_path));

    match cli.command {
        Commands::Match {
            problem,
            domain,
            evidence,
        } => commands::matching::run(&config, &problem, &domain, evidence.as_deref()).await?,
        Commands::Apply {
            pattern_id,
            problem,
            domain,
            evidence,
            adaptations,
        } => {
            commands::apply::run(
                &config,
                &pattern_id,
                &problem,
                &domain,
                evidence.as_deref(),
                adaptations,
            )
            .await?
        }
        Commands::Strategy {
            problem,
            domain,
            evidence,
            run,
        } => commands::strategy::run(&config, &problem, &domain, evidence.as_deref(), run).await?,
        Commands::Patterns { domain } => commands::catalogue::patterns(&config, domain.as_deref())?,
        Commands::Templates { domain } => commands::catalogue::templates(&config, domain.as_deref())?,
        Commands::Show { id } => commands::catalogue::show(&config, &id)?,
        Commands::Stats => commands::status::stats(&config)?,
        Commands::Health => commands::status::health(&config)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show(&config)?,
            ConfigAction::Path => commands::config_cmd::path(),
            ConfigAction::Validate => commands::config_cmd::validate()?,
        },
    }

    Ok(())
}
