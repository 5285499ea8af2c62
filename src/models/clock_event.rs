use super::site_tag::SiteTag;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// An immutable clock-in/clock-out fact. Append-only: never updated, never
/// deleted in normal operation.
#[derive(Debug, Clone, Serialize)]
pub struct ClockEvent {
    pub id: i64,                  // ⇔ clock_events.id (0 before insert)
    pub employee_id: i64,         // ⇔ clock_events.employee_id
    pub company_id: i64,          // ⇔ clock_events.company_id
    pub latitude: f64,            // ⇔ clock_events.latitude
    pub longitude: f64,           // ⇔ clock_events.longitude
    pub tag: SiteTag,             // ⇔ clock_events.tag ('on-site' | 'remote')
    pub timestamp: NaiveDateTime, // ⇔ clock_events.timestamp (TEXT, second precision)
    pub created_at: String,       // ⇔ clock_events.created_at (TEXT, ISO8601)
}

impl ClockEvent {
    /// Build an event ready for insertion.
    /// - `id = 0` (assigned by the store on append)
    /// - `created_at = now() in ISO8601`
    pub fn new(
        employee_id: i64,
        company_id: i64,
        latitude: f64,
        longitude: f64,
        tag: SiteTag,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            company_id,
            latitude,
            longitude,
            tag,
            timestamp,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
