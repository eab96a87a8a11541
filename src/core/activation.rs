//! Subscription activation state machine.
//!
//! Two states only: Inactive ⇄ Active. Flipping to Active seeds one default
//! window per weekday; flipping to Inactive deletes every window the
//! subscription owns. Neither transition may skip its side effect.

use crate::config::Config;
use crate::db::log::wplog;
use crate::db::pool::DbPool;
use crate::db::subscriptions::set_active;
use crate::db::windows::{delete_windows, upsert_window};
use crate::errors::AppResult;
use crate::models::subscription::Subscription;
use crate::models::weekday::ALL_DAYS;
use crate::ui::messages::warning;

pub struct ActivationLogic;

impl ActivationLogic {
    /// Inactive → Active: persist the flag, then seed seven default windows
    /// (Monday through Sunday, configured start/end).
    ///
    /// The seven upserts are independent writes. A failed row is reported and
    /// logged but does not roll back or abort the others; re-activating later
    /// re-seeds whatever is missing.
    pub fn activate(pool: &DbPool, cfg: &Config, sub: &Subscription) -> AppResult<()> {
        set_active(&pool.conn, sub.id, true)?;

        let mut seeded = 0;
        for day in ALL_DAYS {
            match upsert_window(
                &pool.conn,
                sub.id,
                day,
                &cfg.default_window_start,
                &cfg.default_window_end,
            ) {
                Ok(()) => seeded += 1,
                Err(e) => {
                    warning(format!(
                        "Failed to seed {} window for '{}': {}",
                        day.label(),
                        sub.name,
                        e
                    ));
                    let _ = wplog(
                        &pool.conn,
                        "seed_window_failed",
                        &sub.name,
                        &format!("{}: {}", day.to_db_str(), e),
                    );
                }
            }
        }

        wplog(
            &pool.conn,
            "activate",
            &sub.name,
            &format!("Activated, seeded {}/7 default windows", seeded),
        )?;

        Ok(())
    }

    /// Active → Inactive: persist the flag, then drop all windows.
    pub fn deactivate(pool: &DbPool, sub: &Subscription) -> AppResult<()> {
        set_active(&pool.conn, sub.id, false)?;

        let removed = delete_windows(&pool.conn, sub.id)?;

        wplog(
            &pool.conn,
            "deactivate",
            &sub.name,
            &format!("Deactivated, removed {} windows", removed),
        )?;

        Ok(())
    }
}
