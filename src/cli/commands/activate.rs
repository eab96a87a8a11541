use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::activation::ActivationLogic;
use crate::db::pool::DbPool;
use crate::db::subscriptions::find_subscription;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handles both `activate` and `deactivate`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Activate { subscription } => {
            let pool = DbPool::new(&cfg.database)?;
            let sub = find_subscription(&pool.conn, subscription)?;

            if sub.active {
                info(format!("Subscription '{}' is already active.", sub.name));
                return Ok(());
            }

            ActivationLogic::activate(&pool, cfg, &sub)?;
            success(format!(
                "Subscription '{}' activated with default windows {}–{} on every day.",
                sub.name, cfg.default_window_start, cfg.default_window_end
            ));
        }
        Commands::Deactivate { subscription } => {
            let pool = DbPool::new(&cfg.database)?;
            let sub = find_subscription(&pool.conn, subscription)?;

            if !sub.active {
                info(format!("Subscription '{}' is already inactive.", sub.name));
                return Ok(());
            }

            ActivationLogic::deactivate(&pool, &sub)?;
            success(format!(
                "Subscription '{}' deactivated, all windows removed.",
                sub.name
            ));
        }
        _ => {}
    }

    Ok(())
}
