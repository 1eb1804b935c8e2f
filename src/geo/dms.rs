//! Degree/minute/second rendering of decimal coordinates.

use crate::constants::UNKNOWN_LOCATION;
use crate::geo::GeoPoint;

/// A coordinate split into whole degrees, whole minutes and fractional seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: i64,
    pub minutes: i64,
    pub seconds: f64,
    pub negative: bool,
}

impl Dms {
    /// Decompose a decimal-degree value
    ///
    /// The sign is taken first; degrees and minutes are floored, seconds keep
    /// the remaining fraction at full precision.
    pub fn from_degrees(decimal_degrees: f64) -> Self {
        let negative = decimal_degrees < 0.0;
        let mut d = decimal_degrees.abs();

        let degrees = d.floor();
        d = (d - degrees) * 60.0;
        let minutes = d.floor();
        d = (d - minutes) * 60.0;

        Self {
            degrees: degrees as i64,
            minutes: minutes as i64,
            seconds: d,
            negative,
        }
    }

    /// Render as `D° M′ S.SSS″ H latitude|longitude`
    ///
    /// Returns an empty string when the seconds are not a number.
    pub fn format(&self, is_latitude: bool) -> String {
        if self.seconds.is_nan() {
            return String::new();
        }
        let (hemisphere, axis) = match (is_latitude, self.negative) {
            (true, false) => ("N", "latitude"),
            (true, true) => ("S", "latitude"),
            (false, false) => ("E", "longitude"),
            (false, true) => ("W", "longitude"),
        };
        format!(
            "{}° {}′ {:.3}″ {} {}",
            self.degrees, self.minutes, self.seconds, hemisphere, axis
        )
    }
}

/// Render a light position as `"<lat>, <lon>"` in DMS
///
/// Missing and placeholder positions (see [`GeoPoint::is_placeholder`])
/// render as [`UNKNOWN_LOCATION`].
pub fn format_location(location: Option<&GeoPoint>) -> String {
    let Some(loc) = location else {
        return UNKNOWN_LOCATION.to_string();
    };
    if loc.is_placeholder() {
        return UNKNOWN_LOCATION.to_string();
    }

    let lat = Dms::from_degrees(loc.latitude).format(true);
    let lon = Dms::from_degrees(loc.longitude).format(false);
    if lat.is_empty() || lon.is_empty() {
        return UNKNOWN_LOCATION.to_string();
    }
    format!("{}, {}", lat, lon)
}
