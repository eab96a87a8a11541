use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `events` table (ad-hoc, non-recurring calendar entries).
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            title        TEXT NOT NULL,
            start_time   TEXT NOT NULL,
            end_time     TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            location     TEXT,
            status       TEXT NOT NULL DEFAULT 'Scheduled',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_start ON events(start_time);
        "#,
    )?;
    Ok(())
}

/// Create the `subscriptions` table.
fn create_subscriptions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS subscriptions (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            name   TEXT NOT NULL UNIQUE,
            active INTEGER NOT NULL DEFAULT 0 CHECK(active IN (0,1))
        );
        "#,
    )?;
    Ok(())
}

/// Create the `subscription_windows` table.
///
/// `day_of_week` is stored as a lowercase English day name; the CHECK
/// constraint keeps writer and reader on the same encoding. One window per
/// (subscription, day) is enforced by the unique index.
fn create_windows_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS subscription_windows (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            subscription_id INTEGER NOT NULL,
            day_of_week     TEXT NOT NULL CHECK(day_of_week IN
                ('monday','tuesday','wednesday','thursday','friday','saturday','sunday')),
            start_time      TEXT NOT NULL,
            end_time        TEXT NOT NULL,
            FOREIGN KEY(subscription_id) REFERENCES subscriptions(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_windows_day ON subscription_windows(day_of_week);
        "#,
    )?;
    Ok(())
}

/// Check whether a recorded migration has already been applied.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Collapse legacy duplicate (subscription, day) window rows, then add the
/// unique index that prevents new ones. The lowest row id survives, matching
/// the first-row-wins reads that predate the index.
fn migrate_unique_window_per_day(conn: &Connection) -> Result<()> {
    let version = "20250412_0001_unique_window_per_day";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        BEGIN;

        DELETE FROM subscription_windows
        WHERE id NOT IN (
            SELECT MIN(id) FROM subscription_windows
            GROUP BY subscription_id, day_of_week
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_windows_sub_day
            ON subscription_windows(subscription_id, day_of_week);

        COMMIT;
        "#,
    )?;

    mark_migration_applied(
        conn,
        version,
        "Deduplicated subscription_windows and added unique (subscription, day) index",
    )?;

    success(format!(
        "Migration applied: {} → one window per (subscription, day)",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (also stores migration markers)
    ensure_log_table(conn)?;

    // 2) Base tables
    let fresh = !table_exists(conn, "subscriptions")?;

    create_events_table(conn)?;
    create_subscriptions_table(conn)?;
    create_windows_table(conn)?;

    if fresh {
        success("Created weekplan tables (modern schema).");
    }

    // 3) Recorded migrations
    migrate_unique_window_per_day(conn)?;

    Ok(())
}
