use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::{BatchOutcome, run_daily_closing};
use crate::core::closing::ClosingService;
use crate::db::log::ttlog;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::{parse_day, yesterday};
use crate::utils::time::format_minutes;
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Close {
        employee,
        company,
        day,
        all,
    } = cmd
    {
        let day = match day {
            Some(s) => parse_day(s)?,
            None => yesterday(),
        };

        let store = SqliteStore::open(&cfg.database)?;

        if *all {
            let outcome = run_daily_closing(&store, day)?;
            audit_batch(store.conn(), &outcome)?;
            return Ok(());
        }

        // clap guarantees both are present without --all
        let (employee, company) = match (employee, company) {
            (Some(e), Some(c)) => (*e, *c),
            _ => return Err(AppError::Other("missing --employee/--company".into())),
        };

        let service = ClosingService {
            employees: &store,
            events: &store,
            balances: &store,
        };

        match service.close_day(employee, company, day) {
            Ok(closing) => {
                if closing.day_balance.dangling_event {
                    warning(format!(
                        "Odd event count on {}: trailing event ignored.",
                        day
                    ));
                }
                success(format!(
                    "Day {} closed for employee {}: delta {}, running balance {}",
                    day,
                    employee,
                    format_minutes(closing.day_balance.balance_minutes),
                    format_minutes(closing.new_running_balance),
                ));
            }
            // Re-closing an already-closed day is harmless; report and move on.
            Err(AppError::AlreadyClosed { .. }) => {
                warning(format!(
                    "Day {} was already closed for employee {}; nothing applied.",
                    day, employee
                ));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Persist the batch outcome into the internal log table, one row per run
/// plus one per failure, so a failed closing is never silently lost.
pub fn audit_batch(conn: &Connection, outcome: &BatchOutcome) -> AppResult<()> {
    ttlog(
        conn,
        "closing_batch",
        &outcome.day.to_string(),
        &format!(
            "{} closed, {} already closed, {} failed of {} processed",
            outcome.closed,
            outcome.already_closed,
            outcome.failures.len(),
            outcome.processed(),
        ),
    )?;

    for f in &outcome.failures {
        ttlog(
            conn,
            "closing_failed",
            &format!("employee {}", f.employee_id),
            &f.reason,
        )?;
    }

    Ok(())
}
