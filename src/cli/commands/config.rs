use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_hhmm;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        //
        // 1) PRINT
        //
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                warning(format!(
                    "No configuration file at {} — using defaults.",
                    path.display()
                ));
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            if cfg.database.trim().is_empty() {
                return Err(AppError::Config("database path is empty".to_string()));
            }

            // seed times must be valid HH:MM or every activation would fail
            parse_hhmm(&cfg.default_window_start).map_err(|_| {
                AppError::Config(format!(
                    "default_window_start is not HH:MM: '{}'",
                    cfg.default_window_start
                ))
            })?;
            parse_hhmm(&cfg.default_window_end).map_err(|_| {
                AppError::Config(format!(
                    "default_window_end is not HH:MM: '{}'",
                    cfg.default_window_end
                ))
            })?;

            success("Configuration is valid.");
        }
    }

    Ok(())
}
