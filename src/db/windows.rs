use crate::errors::{AppError, AppResult};
use crate::models::weekday::Weekday;
use crate::models::window::WindowRow;
use rusqlite::{Connection, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<WindowRow> {
    let day_str: String = row.get("day_of_week")?;
    let day = Weekday::from_db_str(&day_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::UnknownDay(day_str.clone())),
        )
    })?;

    Ok(WindowRow {
        id: row.get("id")?,
        subscription_id: row.get("subscription_id")?,
        subscription_name: row.get("subscription_name")?,
        day,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
    })
}

/// Insert or replace the single window for (subscription, day).
pub fn upsert_window(
    conn: &Connection,
    subscription_id: i64,
    day: Weekday,
    start: &str,
    end: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO subscription_windows (subscription_id, day_of_week, start_time, end_time)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(subscription_id, day_of_week)
         DO UPDATE SET start_time = excluded.start_time, end_time = excluded.end_time",
        params![subscription_id, day.to_db_str(), start, end],
    )?;
    Ok(())
}

/// Delete every window owned by a subscription (deactivation side effect).
pub fn delete_windows(conn: &Connection, subscription_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM subscription_windows WHERE subscription_id = ?1",
        [subscription_id],
    )?;
    Ok(n)
}

/// Windows of active subscriptions for one day of the week, joined with the
/// owning subscription's name.
///
/// Ordered by row id so that, should duplicate rows exist in a legacy
/// database, the lowest id deterministically wins downstream.
pub fn active_windows_for_day(conn: &Connection, day: Weekday) -> AppResult<Vec<WindowRow>> {
    let mut stmt = conn.prepare(
        "SELECT w.id, w.subscription_id, s.name AS subscription_name,
                w.day_of_week, w.start_time, w.end_time
         FROM subscription_windows w
         JOIN subscriptions s ON w.subscription_id = s.id
         WHERE w.day_of_week = ?1 AND s.active = 1
         ORDER BY w.id ASC",
    )?;

    let rows = stmt.query_map([day.to_db_str()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All windows of one subscription, Monday-first for display.
pub fn windows_for_subscription(
    conn: &Connection,
    subscription_id: i64,
) -> AppResult<Vec<WindowRow>> {
    let mut stmt = conn.prepare(
        "SELECT w.id, w.subscription_id, s.name AS subscription_name,
                w.day_of_week, w.start_time, w.end_time
         FROM subscription_windows w
         JOIN subscriptions s ON w.subscription_id = s.id
         WHERE w.subscription_id = ?1
         ORDER BY CASE w.day_of_week
             WHEN 'monday' THEN 0
             WHEN 'tuesday' THEN 1
             WHEN 'wednesday' THEN 2
             WHEN 'thursday' THEN 3
             WHEN 'friday' THEN 4
             WHEN 'saturday' THEN 5
             WHEN 'sunday' THEN 6
         END",
    )?;

    let rows = stmt.query_map([subscription_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
