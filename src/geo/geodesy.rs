use serde::Serialize;

use crate::constants::{EARTH_RADIUS_MILES, UNKNOWN_COORDINATE_THRESHOLD};
use crate::geo::angle::wrap;

/// Geographic position in decimal degrees
///
/// Range is not enforced; out-of-range values flow through the
/// trigonometry unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True for placeholder positions: latitude or longitude within
    /// [`UNKNOWN_COORDINATE_THRESHOLD`] of zero
    pub fn is_placeholder(&self) -> bool {
        self.latitude.abs() < UNKNOWN_COORDINATE_THRESHOLD
            || self.longitude.abs() < UNKNOWN_COORDINATE_THRESHOLD
    }

    pub fn lat_radians(&self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn lon_radians(&self) -> f64 {
        self.longitude.to_radians()
    }
}

/// Initial great-circle heading from `from` to `to`, in degrees `[-180, 180)`
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lon = to.lon_radians() - from.lon_radians();
    let (lat_from, lat_to) = (from.lat_radians(), to.lat_radians());

    let heading = (d_lon.sin() * lat_to.cos())
        .atan2(lat_from.cos() * lat_to.sin() - lat_from.sin() * lat_to.cos() * d_lon.cos());

    wrap(heading.to_degrees(), -180.0, 180.0)
}

/// Great-circle distance in statute miles (spherical law of cosines)
pub fn great_circle_distance_miles(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (lat_from, lat_to) = (from.lat_radians(), to.lat_radians());
    let d_lon = to.lon_radians() - from.lon_radians();

    let cos_angle = lat_from.sin() * lat_to.sin() + lat_from.cos() * lat_to.cos() * d_lon.cos();

    // Rounding can push identical points just past 1.0
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_MILES
}
