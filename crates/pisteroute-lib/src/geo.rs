use serde::{Deserialize, Serialize};

/// Sphere radius in metres used for every great-circle computation.
///
/// This is a regional calibration for Alpine latitudes, not the standard
/// mean Earth radius. Keeping it as the single named constant means a future
/// recalibration touches exactly one place.
pub const EARTH_RADIUS_M: f64 = 6_373_252.0;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point, in metres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance_between(*self, *other)
    }
}

/// Haversine great-circle distance between two points, in metres.
pub fn distance_between(a: LatLon, b: LatLon) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let havt = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_M * (2.0 * havt.sqrt().atan2((1.0 - havt).sqrt()))
}

/// Total length of a polyline, in metres.
///
/// A single point has length zero. Callers must not pass an empty slice.
pub fn polyline_length(points: &[LatLon]) -> f64 {
    debug_assert!(!points.is_empty(), "polyline requires at least one point");
    points
        .windows(2)
        .map(|pair| distance_between(pair[0], pair[1]))
        .sum()
}
