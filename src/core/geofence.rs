//! Geofence classifier: great-circle distance on a spherical Earth model.
//! Pure functions, no I/O. Malformed coordinates are the caller's problem.

use crate::models::site_tag::SiteTag;

/// Mean Earth radius in meters (spherical model).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Haversine distance between two coordinates, in meters.
pub fn distance_meters(a: Coord, b: Coord) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// On-site iff the event coordinate lies within `radius_m` of the company's
/// reference coordinate (boundary inclusive).
pub fn classify(center: Coord, radius_m: f64, point: Coord) -> SiteTag {
    if distance_meters(center, point) <= radius_m {
        SiteTag::OnSite
    } else {
        SiteTag::Remote
    }
}
