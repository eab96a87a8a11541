use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::wplog;
use crate::db::pool::DbPool;
use crate::db::subscriptions::find_subscription;
use crate::db::windows::{upsert_window, windows_for_subscription};
use crate::errors::{AppError, AppResult};
use crate::models::weekday::Weekday;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_hhmm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Window {
        subscription,
        day,
        start,
        end,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let sub = find_subscription(&pool.conn, subscription)?;

        //
        // 1) No day given → list the subscription's windows
        //
        let Some(day) = day else {
            let windows = windows_for_subscription(&pool.conn, sub.id)?;

            if windows.is_empty() {
                println!("No windows for '{}' (inactive?).", sub.name);
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "DAY".to_string(),
                    width: 10,
                },
                Column {
                    header: "START".to_string(),
                    width: 6,
                },
                Column {
                    header: "END".to_string(),
                    width: 6,
                },
            ]);

            for w in &windows {
                table.add_row(vec![
                    w.day.label().to_string(),
                    w.start_time.clone(),
                    w.end_time.clone(),
                ]);
            }

            print!("{}", table.render());
            return Ok(());
        };

        //
        // 2) Day given → upsert, both times required
        //
        let (Some(start), Some(end)) = (start, end) else {
            return Err(AppError::Window(
                "editing a window requires both --start and --end".to_string(),
            ));
        };

        let day = Weekday::parse(day)?;

        // validate strictly before writing; the store must never hold
        // anything but zero-padded 24h HH:MM
        parse_hhmm(start)?;
        parse_hhmm(end)?;

        upsert_window(&pool.conn, sub.id, day, start, end)?;

        wplog(
            &pool.conn,
            "window_upsert",
            &sub.name,
            &format!("{} {}–{}", day.to_db_str(), start, end),
        )?;

        success(format!(
            "Window for '{}' on {} set to {}–{}.",
            sub.name,
            day.label(),
            start,
            end
        ));
    }

    Ok(())
}
