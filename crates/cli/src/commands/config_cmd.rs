//! `reasonforge config` — Configuration management commands.

use reasonforge_config::AppConfig;

pub fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let missing: Vec<_> = config
                .library
                .catalogue_files
                .iter()
                .filter(|p| !p.exists())
                .collect();

            if missing.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for path in &missing {
                    println!("   ⚠️  Catalogue file not found: {}", path.display());
                }
            }

            println!();
            println!("   Built-in seed:   {}", config.library.seed_builtin);
            println!("   Catalogue files: {}", config.library.catalogue_files.len());
            println!("   Max matches:     {}", config.library.max_matches);
            println!("   Log level:       {}", config.logging.level);
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub fn show(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path() {
    println!("{}", AppConfig::config_path().display());
}
