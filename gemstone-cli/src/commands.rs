//! Subcommand handlers for the gemstone CLI.

use crate::{Commands, ConfigAction};
use gemstone_pipeline::{DEFAULT_CONFIG_FILE, PipelineConfig, load_config};
use std::path::{Path, PathBuf};

pub fn handle_command(command: Commands, config_file: Option<&Path>) -> anyhow::Result<()> {
    match command {
        Commands::Config { action } => handle_config(action, config_file),
    }
}

fn handle_config(action: ConfigAction, config_file: Option<&Path>) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init => {
            let path = match config_file {
                Some(p) => p.to_path_buf(),
                None => PathBuf::from(DEFAULT_CONFIG_FILE),
            };
            if path.exists() {
                println!("Configuration file already exists at: {}", path.display());
                return Ok(());
            }
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            let default_config = PipelineConfig::default();
            let toml_str = toml::to_string_pretty(&default_config)?;
            std::fs::write(&path, &toml_str)?;
            println!("Created default configuration at: {}", path.display());
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(config_file, None)
                .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{}", toml_str);
            Ok(())
        }
    }
}
