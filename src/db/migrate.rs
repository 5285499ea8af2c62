use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Everything else is versioned against
/// markers stored in this table.
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

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Initial schema: companies, employees, append-only clock events, and the
/// closed-day ledger.
fn create_initial_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            name               TEXT NOT NULL,
            latitude           REAL NOT NULL,
            longitude          REAL NOT NULL,
            geofence_radius_m  REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS employees (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id              INTEGER NOT NULL REFERENCES companies(id),
            name                    TEXT NOT NULL,
            expected_daily_minutes  INTEGER NOT NULL DEFAULT 480,
            balance_minutes         INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS clock_events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL,
            company_id  INTEGER NOT NULL,
            latitude    REAL NOT NULL,
            longitude   REAL NOT NULL,
            tag         TEXT NOT NULL CHECK(tag IN ('on-site','remote')),
            timestamp   TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_clock_events_employee_ts
            ON clock_events(employee_id, timestamp);

        CREATE TABLE IF NOT EXISTS closings (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   INTEGER NOT NULL,
            company_id    INTEGER NOT NULL,
            day           TEXT NOT NULL,
            delta_minutes INTEGER NOT NULL,
            balance_after INTEGER NOT NULL,
            closed_at     TEXT NOT NULL,
            UNIQUE(employee_id, day)
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and safe to call on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let version = "20250801_0001_initial_schema";

    if !migration_applied(conn, version)? {
        let fresh = !table_exists(conn, "clock_events")?;

        create_initial_schema(conn)?;
        mark_migration(
            conn,
            version,
            "Created companies, employees, clock_events, closings",
        )?;

        if fresh {
            success("Created attendance schema (companies, employees, clock_events, closings).");
        }
    }

    Ok(())
}
