use serde::Serialize;

/// A tenant. Owns the geofence every clock event of its employees is
/// classified against.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub latitude: f64,          // ⇔ companies.latitude (reference coordinate)
    pub longitude: f64,         // ⇔ companies.longitude
    pub geofence_radius_m: f64, // ⇔ companies.geofence_radius_m
}
