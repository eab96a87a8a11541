use crate::errors::{AppError, AppResult};
use crate::models::subscription::{DEFAULT_SUBSCRIPTIONS, Subscription};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Subscription> {
    Ok(Subscription {
        id: row.get("id")?,
        name: row.get("name")?,
        active: row.get::<_, i64>("active")? == 1,
    })
}

/// All subscriptions, active ones first (the ordering the manage view uses).
pub fn list_subscriptions(conn: &Connection) -> AppResult<Vec<Subscription>> {
    let mut stmt =
        conn.prepare("SELECT id, name, active FROM subscriptions ORDER BY active DESC, id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Look a subscription up by name (case-insensitive) or by numeric id.
pub fn find_subscription(conn: &Connection, key: &str) -> AppResult<Subscription> {
    if let Ok(id) = key.parse::<i64>() {
        let found = conn
            .prepare("SELECT id, name, active FROM subscriptions WHERE id = ?1")?
            .query_row([id], map_row)
            .optional()?;
        if let Some(sub) = found {
            return Ok(sub);
        }
    }

    conn.prepare("SELECT id, name, active FROM subscriptions WHERE name = ?1")?
        .query_row([key.to_lowercase()], map_row)
        .optional()?
        .ok_or_else(|| AppError::UnknownSubscription(key.to_string()))
}

pub fn insert_subscription(conn: &Connection, name: &str) -> AppResult<Subscription> {
    let name = name.to_lowercase();

    let exists: Option<i64> = conn
        .prepare("SELECT id FROM subscriptions WHERE name = ?1")?
        .query_row([&name], |row| row.get(0))
        .optional()?;
    if exists.is_some() {
        return Err(AppError::SubscriptionExists(name));
    }

    conn.execute(
        "INSERT INTO subscriptions (name, active) VALUES (?1, 0)",
        [&name],
    )?;

    Ok(Subscription {
        id: conn.last_insert_rowid(),
        name,
        active: false,
    })
}

pub fn set_active(conn: &Connection, id: i64, active: bool) -> AppResult<()> {
    conn.execute(
        "UPDATE subscriptions SET active = ?1 WHERE id = ?2",
        params![if active { 1 } else { 0 }, id],
    )?;
    Ok(())
}

/// Seed the stock subscriptions on a fresh install, all inactive.
/// A non-empty table means the user already has data; leave it alone.
pub fn seed_default_subscriptions(conn: &Connection) -> AppResult<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM subscriptions", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    for name in DEFAULT_SUBSCRIPTIONS {
        conn.execute(
            "INSERT INTO subscriptions (name, active) VALUES (?1, 0)",
            [name],
        )?;
    }

    Ok(())
}
