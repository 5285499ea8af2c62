use serde::Serialize;

/// An employee record. The engine reads everything and writes exactly one
/// column: `balance_minutes`, and only as an add (never a wholesale replace).
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    /// Contractual daily work duration, the baseline the day balance is
    /// compared against.
    pub expected_daily_minutes: i64,
    /// Lifetime banked minutes (positive = overtime credit).
    pub balance_minutes: i64,
}
