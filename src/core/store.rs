//! Store seams the engine works against. `db::store::SqliteStore` is the
//! production implementation; tests plug in mocks.

use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::company::Company;
use crate::models::employee::Employee;
use chrono::NaiveDate;

/// Employee roster lookups. Read-only from the engine's perspective.
pub trait EmployeeDirectory {
    /// An employee is only visible inside its own company.
    fn find_employee(&self, employee_id: i64, company_id: i64) -> AppResult<Employee>;

    /// Full roster across all companies, for the batch closing sweep.
    fn list_employees(&self) -> AppResult<Vec<Employee>>;
}

pub trait CompanyStore {
    fn find_company(&self, company_id: i64) -> AppResult<Company>;
}

/// Append-only clock event storage. No update or delete surface.
pub trait EventStore {
    /// Persist an event (`id == 0`) and return it with its assigned id.
    fn append(&self, event: &ClockEvent) -> AppResult<ClockEvent>;

    /// Events whose timestamp falls within [00:00:00, 23:59:59] of `day`,
    /// ordered by timestamp then insertion id.
    fn events_for_day(&self, employee_id: i64, day: NaiveDate) -> AppResult<Vec<ClockEvent>>;
}

/// Running-balance persistence plus the closed-day ledger.
pub trait BalanceStore {
    fn running_balance(&self, employee_id: i64) -> AppResult<i64>;

    /// Atomically mark (employee, day) closed and fold `delta_minutes` into
    /// the running balance, as a single transaction. Returns the new balance,
    /// or `None` when the day was already closed (nothing is changed).
    ///
    /// The balance write is a single-column add, never a record replace, so
    /// closings commute and unrelated concurrent field updates survive.
    fn commit_closing(
        &self,
        employee_id: i64,
        company_id: i64,
        day: NaiveDate,
        delta_minutes: i64,
    ) -> AppResult<Option<i64>>;
}

/// Everything the closing batch needs, in one bound.
pub trait Store: EmployeeDirectory + CompanyStore + EventStore + BalanceStore {}

impl<T: EmployeeDirectory + CompanyStore + EventStore + BalanceStore> Store for T {}
