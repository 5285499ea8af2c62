//! Clock event recorder: validate, classify against the owner company's
//! geofence, stamp, append.

use crate::core::geofence::{self, Coord};
use crate::core::store::{CompanyStore, EmployeeDirectory, EventStore};
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use chrono::{Local, NaiveDateTime, Timelike};

pub struct Recorder<'a> {
    pub employees: &'a dyn EmployeeDirectory,
    pub companies: &'a dyn CompanyStore,
    pub events: &'a dyn EventStore,
}

impl Recorder<'_> {
    /// Record a clock event stamped with the current local instant
    /// (truncated to second precision).
    pub fn record(
        &self,
        employee_id: i64,
        company_id: i64,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<ClockEvent> {
        // Second precision: sub-second timing is out of contract.
        let now = Local::now().naive_local();
        let now = now.with_nanosecond(0).unwrap_or(now);
        self.record_at(employee_id, company_id, latitude, longitude, now)
    }

    /// Record a clock event at an explicit instant (corrections, backfill).
    /// Same validation and classification as `record`.
    pub fn record_at(
        &self,
        employee_id: i64,
        company_id: i64,
        latitude: f64,
        longitude: f64,
        timestamp: NaiveDateTime,
    ) -> AppResult<ClockEvent> {
        let point = Coord::new(latitude, longitude);
        if !point.in_range() {
            // Rejected before any lookup or write.
            return Err(AppError::InvalidCoordinate(format!(
                "lat={latitude}, lon={longitude}"
            )));
        }

        let employee = self.employees.find_employee(employee_id, company_id)?;
        let company = self.companies.find_company(employee.company_id)?;

        let center = Coord::new(company.latitude, company.longitude);
        let tag = geofence::classify(center, company.geofence_radius_m, point);

        let event = ClockEvent::new(
            employee.id,
            company.id,
            latitude,
            longitude,
            tag,
            timestamp,
        );

        self.events.append(&event)
    }
}
