use serde::Serialize;

use crate::error::{LightsError, Result};
use crate::geo::GeoPoint;
use crate::light::RawLightRow;

/// Viewing location and magnetic declination for one run
///
/// Taken from the first input row. `magnetic_offset_deg` is true north
/// minus magnetic north, read from that row's `bearing` field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceFrame {
    pub home: GeoPoint,
    pub magnetic_offset_deg: f64,
}

impl ReferenceFrame {
    pub fn new(home: GeoPoint, magnetic_offset_deg: f64) -> Self {
        Self {
            home,
            magnetic_offset_deg,
        }
    }

    /// Establish the frame from the first row
    ///
    /// Latitude, longitude and bearing must all parse.
    pub fn from_row(row: &RawLightRow) -> Result<Self> {
        let latitude = required(row, "latitude")?;
        let longitude = required(row, "longitude")?;
        let magnetic_offset_deg = required(row, "bearing")?;

        Ok(Self::new(
            GeoPoint::new(latitude, longitude),
            magnetic_offset_deg,
        ))
    }
}

fn required(row: &RawLightRow, field: &str) -> Result<f64> {
    row.number(field).ok_or_else(|| match row.get(field) {
        Some(raw) => LightsError::MissingReferenceFrame(format!(
            "first row has unparsable {}: {:?}",
            field, raw
        )),
        None => LightsError::MissingReferenceFrame(format!("first row has no {}", field)),
    })
}
