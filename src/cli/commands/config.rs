use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:");
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            let path = Config::config_file();
            if !path.exists() {
                info(format!(
                    "No configuration file at {}: defaults are in use.",
                    path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            let missing = Config::missing_keys(&content)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing field '{}' (default value used)", key));
                }
            }
        }
    }

    Ok(())
}
