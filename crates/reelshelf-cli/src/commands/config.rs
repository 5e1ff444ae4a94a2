use crate::output::Output;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use reelshelf_config::Config;
use serde_json::json;
use std::path::Path;

use crate::ConfigCommands;

pub fn run_config(
    cmd: ConfigCommands,
    config_file: &Path,
    config: &Config,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            if output.is_human() {
                let content =
                    toml::to_string_pretty(config).wrap_err("Failed to render configuration")?;
                output.println(content);
            } else {
                let value =
                    serde_json::to_value(config).wrap_err("Failed to render configuration")?;
                output.json(&value);
            }
        }
        ConfigCommands::Path => {
            if output.is_human() {
                let state = if config_file.exists() {
                    ""
                } else {
                    " (not created, using defaults)"
                };
                output.println(format!("{}{}", config_file.display(), state));
            } else {
                output.json(&json!({
                    "type": "config_path",
                    "path": config_file.display().to_string(),
                    "exists": config_file.exists(),
                }));
            }
        }
        ConfigCommands::Init { force } => {
            if config_file.exists() && !force {
                return Err(eyre!(
                    "Config file already exists at {}. Use --force to overwrite",
                    config_file.display()
                ));
            }
            Config::default()
                .save_to_file(config_file)
                .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;
            output.success(format!("Wrote default configuration to {}", config_file.display()));
        }
    }
    Ok(())
}
