use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    let subs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM subscriptions", [], |row| row.get(0))?;
    let active: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM subscriptions WHERE active = 1",
        [],
        |row| row.get(0),
    )?;
    let windows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM subscription_windows", [], |row| {
            row.get(0)
        })?;

    println!(
        "{}• Ad-hoc events:{} {}{}{}",
        CYAN, RESET, GREEN, events, RESET
    );
    println!(
        "{}• Subscriptions:{} {}{}{} ({} active)",
        CYAN, RESET, GREEN, subs, RESET, active
    );
    println!(
        "{}• Recurring windows:{} {}{}{}",
        CYAN, RESET, GREEN, windows, RESET
    );

    //
    // 3) EVENT DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT date(start_time) FROM events ORDER BY start_time ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT date(start_time) FROM events ORDER BY start_time DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Event date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
