use crate::errors::{AppError, AppResult};
use crate::models::event::{AdHocEvent, DATETIME_FMT};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<AdHocEvent> {
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let start = NaiveDateTime::parse_from_str(&start_str, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDateTime(start_str.clone())),
        )
    })?;

    let end = NaiveDateTime::parse_from_str(&end_str, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDateTime(end_str.clone())),
        )
    })?;

    Ok(AdHocEvent {
        id: row.get("id")?,
        title: row.get("title")?,
        start,
        end,
        description: row.get("description")?,
        location: row.get("location")?,
        status: row.get("status")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &AdHocEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (title, start_time, end_time, description, location, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.title,
            ev.start_str(),
            ev.end_str(),
            ev.description,
            ev.location,
            ev.status,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Ad-hoc events whose *start* falls on the given date. An event spilling
/// past midnight is still keyed by its start date only.
pub fn events_on_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<AdHocEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM events
         WHERE date(start_time) = ?1
         ORDER BY start_time ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
