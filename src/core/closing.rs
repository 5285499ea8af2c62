//! Day closing: fold one day's balance into the employee's running balance,
//! at most once per (employee, day).

use crate::core::balance::BalanceService;
use crate::core::store::{BalanceStore, EmployeeDirectory, EventStore};
use crate::errors::{AppError, AppResult};
use crate::models::day_balance::DayBalance;
use chrono::NaiveDate;

/// Outcome of a successful closing.
#[derive(Debug, Clone)]
pub struct Closing {
    pub day_balance: DayBalance,
    pub new_running_balance: i64,
}

pub struct ClosingService<'a> {
    pub employees: &'a dyn EmployeeDirectory,
    pub events: &'a dyn EventStore,
    pub balances: &'a dyn BalanceStore,
}

impl ClosingService<'_> {
    /// Close `day` for one employee.
    ///
    /// The balance is computed first, so a failed computation never consumes
    /// the (employee, day) ledger slot. The store then marks the day closed
    /// and applies the delta in one transaction; a day that is already closed
    /// comes back as `AlreadyClosed` with nothing changed, which makes
    /// repeated triggers for the same day harmless.
    pub fn close_day(
        &self,
        employee_id: i64,
        company_id: i64,
        day: NaiveDate,
    ) -> AppResult<Closing> {
        let calc = BalanceService {
            employees: self.employees,
            events: self.events,
        };
        let day_balance = calc.daily_balance(employee_id, company_id, day)?;

        match self.balances.commit_closing(
            employee_id,
            company_id,
            day,
            day_balance.balance_minutes,
        )? {
            Some(new_running_balance) => Ok(Closing {
                day_balance,
                new_running_balance,
            }),
            None => Err(AppError::AlreadyClosed { employee_id, day }),
        }
    }
}
