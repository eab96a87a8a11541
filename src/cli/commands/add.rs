use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::events::insert_event;
use crate::db::log::wplog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::AdHocEvent;
use crate::ui::messages::success;
use crate::utils::date::parse_datetime;

/// Add a one-off event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        start,
        end,
        description,
        location,
        status,
    } = cmd
    {
        //
        // 1. Parse instants (mandatory)
        //
        let start = parse_datetime(start)?;
        let end = parse_datetime(end)?;

        if end < start {
            return Err(AppError::InvalidDateTime(format!(
                "end instant {} precedes start instant {}",
                end, start
            )));
        }

        //
        // 2. Open DB and insert
        //
        let pool = DbPool::new(&cfg.database)?;

        let ev = AdHocEvent::new(
            title.clone(),
            start,
            end,
            description.clone().unwrap_or_default(),
            location.clone(),
            status.clone(),
        );

        let id = insert_event(&pool.conn, &ev)?;

        wplog(
            &pool.conn,
            "add_event",
            title,
            &format!("{} → {}", ev.start_str(), ev.end_str()),
        )?;

        success(format!("Event '{}' scheduled (id {}).", title, id));
    }

    Ok(())
}
