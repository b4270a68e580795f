//! Subcommand implementations and the wiring they share.

pub mod apply;
pub mod catalogue;
pub mod config_cmd;
pub mod matching;
pub mod status;
pub mod strategy;

use std::path::Path;

use reasonforge_config::AppConfig;
use reasonforge_core::knowledge::{KnowledgeContext, KnowledgeProvider};
use reasonforge_library::{PatternLibrary, StaticKnowledgeProvider};

/// Install the tracing subscriber.
pub fn init_tracing(config: &AppConfig, verbose: bool) {
    let directive = filter_directive(
        &config.logging.level,
        verbose,
        std::env::var("RUST_LOG").ok(),
    );
    let filter = tracing_subscriber::EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// `--verbose` forces debug, then `RUST_LOG`, then the configured level.
fn filter_directive(level: &str, verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}

/// Where the loaded configuration came from. Logged once the subscriber is up,
/// since loading happens before it exists.
pub fn config_source(path: &Path) -> &'static str {
    if path.exists() {
        "Configuration loaded from file"
    } else {
        "No config file found, using defaults"
    }
}

/// Build the library from config: built-in seed plus any catalogue files.
pub fn build_library(config: &AppConfig) -> Result<PatternLibrary, Box<dyn std::error::Error>> {
    let library = if config.library.seed_builtin {
        PatternLibrary::with_builtin_catalogue()
    } else {
        PatternLibrary::empty()
    };

    for path in &config.library.catalogue_files {
        library.load_catalogue_file(path)?;
    }

    Ok(library)
}

/// Fetch evidence from a JSON file, or an empty context when none is given.
pub async fn load_evidence(
    path: Option<&Path>,
    problem: &str,
    domain: &str,
) -> Result<KnowledgeContext, Box<dyn std::error::Error>> {
    let provider = match path {
        Some(path) => StaticKnowledgeProvider::from_json_file(path)?,
        None => StaticKnowledgeProvider::default(),
    };
    Ok(provider.fetch(problem, domain).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_beats_rust_log() {
        assert_eq!(filter_directive("warn", true, Some("error".into())), "debug");
    }

    #[test]
    fn rust_log_beats_config_level() {
        assert_eq!(filter_directive("warn", false, Some("reasonforge=trace".into())), "reasonforge=trace");
        assert_eq!(filter_directive("warn", false, Some("  ".into())), "warn");
        assert_eq!(filter_directive("warn", false, None), "warn");
    }

    #[test]
    fn config_source_reports_missing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(config_source(file.path()), "Configuration loaded from file");
        assert_eq!(
            config_source(Path::new("/nonexistent/reasonforge/config.toml")),
            "No config file found, using defaults"
        );
    }

    #[test]
    fn library_without_seed_is_empty() {
        let mut config = AppConfig::default();
        config.library.seed_builtin = false;
        let library = build_library(&config).unwrap();
        assert!(library.list_all_patterns().is_empty());
    }

    #[test]
    fn missing_catalogue_file_fails_build() {
        let mut config = AppConfig::default();
        config.library.catalogue_files = vec!["/nonexistent/catalogue.json".into()];
        assert!(build_library(&config).is_err());
    }

    #[tokio::test]
    async fn no_evidence_file_gives_empty_context() {
        let ctx = load_evidence(None, "q", "science").await.unwrap();
        assert_eq!(ctx.domain, "science");
        assert!(ctx.relevant_chunks.is_empty());
    }
}
