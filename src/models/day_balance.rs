use chrono::NaiveDate;
use serde::Serialize;

/// Derived balance for one employee on one calendar day. Never persisted on
/// its own and never cached: recomputed from the event set every time, so an
/// event amended before closing is always picked up.
#[derive(Debug, Clone, Serialize)]
pub struct DayBalance {
    pub day: NaiveDate,
    pub worked_minutes: i64,
    pub expected_minutes: i64,
    /// worked - expected. Positive = overtime, negative = shortfall.
    pub balance_minutes: i64,
    /// Set when the day had an odd number of events: the trailing unpaired
    /// event contributed zero minutes to the sum.
    pub dangling_event: bool,
}
