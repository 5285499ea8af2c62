//! Daily balance calculator: pair a day's events and compare the worked
//! total against the employee's contractual minutes.

use crate::core::store::{EmployeeDirectory, EventStore};
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::day_balance::DayBalance;
use chrono::NaiveDate;

/// Sum the worked minutes of a day's events.
///
/// Events are sorted ascending by timestamp (stable, so equal timestamps keep
/// their fetch order) and paired sequentially: event 0 is a clock-in, event 1
/// its clock-out, event 2 the next clock-in, and so on. Pair durations are
/// summed in seconds and the total truncates to whole minutes once, so
/// fractional minutes carry across pairs instead of being lost per pair.
///
/// An odd trailing event is excluded from the sum and reported through the
/// second tuple element; callers decide how loudly to complain.
pub fn worked_minutes(events: &[ClockEvent]) -> (i64, bool) {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    let mut total_secs = 0;
    for pair in sorted.chunks_exact(2) {
        total_secs += (pair[1].timestamp - pair[0].timestamp).num_seconds();
    }

    (total_secs / 60, sorted.len() % 2 != 0)
}

/// Pure core: identical event sets always yield the identical balance,
/// regardless of input order.
pub fn compute_day_balance(
    day: NaiveDate,
    events: &[ClockEvent],
    expected_minutes: i64,
) -> DayBalance {
    let (worked, dangling) = worked_minutes(events);

    DayBalance {
        day,
        worked_minutes: worked,
        expected_minutes,
        balance_minutes: worked - expected_minutes,
        dangling_event: dangling,
    }
}

/// Calculator wired to the stores.
pub struct BalanceService<'a> {
    pub employees: &'a dyn EmployeeDirectory,
    pub events: &'a dyn EventStore,
}

impl BalanceService<'_> {
    /// Compute the balance for one (employee, day). A day with no events is
    /// not an error: worked = 0, full deficit.
    pub fn daily_balance(
        &self,
        employee_id: i64,
        company_id: i64,
        day: NaiveDate,
    ) -> AppResult<DayBalance> {
        let employee = self.employees.find_employee(employee_id, company_id)?;
        let events = self.events.events_for_day(employee.id, day)?;

        Ok(compute_day_balance(
            day,
            &events,
            employee.expected_daily_minutes,
        ))
    }
}
