//! SQLite implementation of the engine's store traits.

use crate::core::store::{BalanceStore, CompanyStore, EmployeeDirectory, EventStore};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::company::Company;
use crate::models::employee::Employee;
use chrono::NaiveDate;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}

impl EmployeeDirectory for SqliteStore {
    fn find_employee(&self, employee_id: i64, company_id: i64) -> AppResult<Employee> {
        queries::find_employee(self.conn(), employee_id, company_id)
    }

    fn list_employees(&self) -> AppResult<Vec<Employee>> {
        queries::list_employees(self.conn())
    }
}

impl CompanyStore for SqliteStore {
    fn find_company(&self, company_id: i64) -> AppResult<Company> {
        queries::find_company(self.conn(), company_id)
    }
}

impl EventStore for SqliteStore {
    fn append(&self, event: &ClockEvent) -> AppResult<ClockEvent> {
        queries::insert_event(self.conn(), event)
    }

    fn events_for_day(&self, employee_id: i64, day: NaiveDate) -> AppResult<Vec<ClockEvent>> {
        queries::load_events_for_day(self.conn(), employee_id, day)
    }
}

impl BalanceStore for SqliteStore {
    fn running_balance(&self, employee_id: i64) -> AppResult<i64> {
        queries::get_balance(self.conn(), employee_id)
    }

    fn commit_closing(
        &self,
        employee_id: i64,
        company_id: i64,
        day: NaiveDate,
        delta_minutes: i64,
    ) -> AppResult<Option<i64>> {
        queries::commit_closing(self.conn(), employee_id, company_id, day, delta_minutes)
    }
}
