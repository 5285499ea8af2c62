use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::company::Company;
use crate::models::employee::Employee;
use crate::models::site_tag::SiteTag;
use crate::utils::date::day_window;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------------

pub fn map_company_row(row: &Row) -> Result<Company> {
    Ok(Company {
        id: row.get("id")?,
        name: row.get("name")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        geofence_radius_m: row.get("geofence_radius_m")?,
    })
}

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        company_id: row.get("company_id")?,
        name: row.get("name")?,
        expected_daily_minutes: row.get("expected_daily_minutes")?,
        balance_minutes: row.get("balance_minutes")?,
    })
}

pub fn map_event_row(row: &Row) -> Result<ClockEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = NaiveDateTime::parse_from_str(&ts_str, "%Y-%m-%d %H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(ts_str.clone())),
        )
    })?;

    let tag_str: String = row.get("tag")?;
    let tag = SiteTag::from_db_str(&tag_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid site tag: {}", tag_str))),
        )
    })?;

    Ok(ClockEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        company_id: row.get("company_id")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        tag,
        timestamp,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

pub fn insert_company(
    conn: &Connection,
    name: &str,
    latitude: f64,
    longitude: f64,
    geofence_radius_m: f64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO companies (name, latitude, longitude, geofence_radius_m)
         VALUES (?1, ?2, ?3, ?4)",
        params![name, latitude, longitude, geofence_radius_m],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_company(conn: &Connection, company_id: i64) -> AppResult<Company> {
    let mut stmt = conn.prepare("SELECT * FROM companies WHERE id = ?1")?;

    stmt.query_row([company_id], map_company_row)
        .optional()?
        .ok_or(AppError::CompanyNotFound(company_id))
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

pub fn insert_employee(
    conn: &Connection,
    company_id: i64,
    name: &str,
    expected_daily_minutes: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (company_id, name, expected_daily_minutes, balance_minutes)
         VALUES (?1, ?2, ?3, 0)",
        params![company_id, name, expected_daily_minutes],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Membership is part of the key: an employee is only found inside its own
/// company, so events are always compared against the right geofence.
pub fn find_employee(conn: &Connection, employee_id: i64, company_id: i64) -> AppResult<Employee> {
    let mut stmt = conn.prepare("SELECT * FROM employees WHERE id = ?1 AND company_id = ?2")?;

    stmt.query_row(params![employee_id, company_id], map_employee_row)
        .optional()?
        .ok_or(AppError::EmployeeNotFound {
            employee_id,
            company_id,
        })
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_balance(conn: &Connection, employee_id: i64) -> AppResult<i64> {
    let mut stmt = conn.prepare("SELECT balance_minutes FROM employees WHERE id = ?1")?;

    stmt.query_row([employee_id], |row| row.get(0))
        .optional()?
        .ok_or(AppError::EmployeeNotFound {
            employee_id,
            company_id: 0,
        })
}

// ---------------------------------------------------------------------------
// Clock events (append-only)
// ---------------------------------------------------------------------------

pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<ClockEvent> {
    conn.execute(
        "INSERT INTO clock_events
             (employee_id, company_id, latitude, longitude, tag, timestamp, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.employee_id,
            ev.company_id,
            ev.latitude,
            ev.longitude,
            ev.tag.to_db_str(),
            ev.timestamp_str(),
            ev.created_at,
        ],
    )?;

    let mut stored = ev.clone();
    stored.id = conn.last_insert_rowid();
    Ok(stored)
}

/// Events within [00:00:00, 23:59:59] of `day`, ordered by timestamp with
/// insertion id as the stable tie-break.
pub fn load_events_for_day(
    conn: &Connection,
    employee_id: i64,
    day: NaiveDate,
) -> AppResult<Vec<ClockEvent>> {
    let (start, end) = day_window(day);

    let mut stmt = conn.prepare(
        "SELECT * FROM clock_events
         WHERE employee_id = ?1 AND timestamp BETWEEN ?2 AND ?3
         ORDER BY timestamp ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![employee_id, start, end], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Closings ledger
// ---------------------------------------------------------------------------

/// Mark (employee, day) closed and fold the delta into the running balance,
/// all in one transaction. Returns None when the ledger already holds the
/// (employee, day) key: nothing is changed in that case.
pub fn commit_closing(
    conn: &Connection,
    employee_id: i64,
    company_id: i64,
    day: NaiveDate,
    delta_minutes: i64,
) -> AppResult<Option<i64>> {
    let tx = conn.unchecked_transaction()?;

    // Check-and-set: the UNIQUE(employee_id, day) key is the idempotence
    // guard. INSERT OR IGNORE reports 0 changed rows when the slot is taken.
    let inserted = tx.execute(
        "INSERT OR IGNORE INTO closings
             (employee_id, company_id, day, delta_minutes, balance_after, closed_at)
         VALUES (?1, ?2, ?3, ?4, 0, datetime('now'))",
        params![employee_id, company_id, day.to_string(), delta_minutes],
    )?;

    if inserted == 0 {
        return Ok(None); // dropped tx rolls back (nothing was written)
    }

    // Monotonic single-column add; never a record replace.
    tx.execute(
        "UPDATE employees SET balance_minutes = balance_minutes + ?1 WHERE id = ?2",
        params![delta_minutes, employee_id],
    )?;

    let new_balance: i64 = tx.query_row(
        "SELECT balance_minutes FROM employees WHERE id = ?1",
        [employee_id],
        |row| row.get(0),
    )?;

    tx.execute(
        "UPDATE closings SET balance_after = ?1 WHERE employee_id = ?2 AND day = ?3",
        params![new_balance, employee_id, day.to_string()],
    )?;

    tx.commit()?;
    Ok(Some(new_balance))
}
