//! Batch closing sweep: close one day for the entire roster, one employee at
//! a time, with isolated failure domains.

use crate::core::closing::ClosingService;
use crate::core::store::Store;
use crate::errors::AppError;
use crate::ui::messages;
use crate::utils::time::format_minutes;
use chrono::NaiveDate;

/// One employee the sweep could not close.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    pub employee_id: i64,
    pub company_id: i64,
    pub reason: String,
}

/// Report of a full sweep. Nothing here aborts the caller: a run that failed
/// for some employees still committed every other closing.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub day: NaiveDate,
    pub closed: usize,
    pub already_closed: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn processed(&self) -> usize {
        self.closed + self.already_closed + self.failures.len()
    }
}

/// Close `day` for every employee in the roster, sequentially (bounds load on
/// the shared store). Each closing is its own failure domain: an error is
/// reported and skipped, never propagated to the remaining roster. Days
/// already in the closing ledger count as skips, not failures.
pub fn run_daily_closing<S: Store>(store: &S, day: NaiveDate) -> Result<BatchOutcome, AppError> {
    // Roster enumeration is the one failure that aborts the run: with no
    // roster there is nothing to isolate.
    let roster = store.list_employees()?;

    messages::tick(format!(
        "Daily closing for {}: {} employee(s) to process",
        day,
        roster.len()
    ));

    let mut outcome = BatchOutcome {
        day,
        closed: 0,
        already_closed: 0,
        failures: Vec::new(),
    };

    let service = ClosingService {
        employees: store,
        events: store,
        balances: store,
    };

    for employee in &roster {
        match service.close_day(employee.id, employee.company_id, day) {
            Ok(closing) => {
                outcome.closed += 1;
                if closing.day_balance.dangling_event {
                    messages::warning(format!(
                        "Employee {}: odd event count on {}, trailing event ignored",
                        employee.id, day
                    ));
                }
                messages::success(format!(
                    "Employee {}: day {} closed, delta {}, balance {}",
                    employee.id,
                    day,
                    format_minutes(closing.day_balance.balance_minutes),
                    format_minutes(closing.new_running_balance),
                ));
            }
            Err(AppError::AlreadyClosed { .. }) => {
                outcome.already_closed += 1;
                messages::info(format!(
                    "Employee {}: day {} already closed, skipped",
                    employee.id, day
                ));
            }
            Err(e) => {
                messages::error(format!("Employee {}: closing failed: {}", employee.id, e));
                outcome.failures.push(BatchFailure {
                    employee_id: employee.id,
                    company_id: employee.company_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    messages::tick(format!(
        "Daily closing for {} done: {} closed, {} already closed, {} failed",
        day,
        outcome.closed,
        outcome.already_closed,
        outcome.failures.len()
    ));

    Ok(outcome)
}
