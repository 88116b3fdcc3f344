//! Configuration commands.

use clap::Subcommand;
use std::path::Path;

use dailycode_core::config::DEFAULT_CONFIG_FILE;
use dailycode_core::GeneratorConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn show(config: GeneratorConfig) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn init(path: Option<&Path>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    if path.exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
    }
    GeneratorConfig::default().save_to(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
