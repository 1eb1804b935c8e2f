use serde::Serialize;

use crate::constants::{FEET_PER_NAUTICAL_MILE, FEET_PER_STATUTE_MILE};
use crate::geo::{GeoPoint, degrees_to_mils, great_circle_distance_miles, initial_bearing, modulo};
use crate::light::{ParsedField, RawLightRow, ReferenceFrame};

/// Where a light's true bearing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BearingSource {
    /// Computed from the home position and the light's coordinates
    Geodesic,
    /// Taken verbatim from the row's `bearing` field
    Declared,
    /// Neither coordinates nor a bearing were usable; bearing is 0
    Missing,
}

/// A navigational light with all derived bearings and distances
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Light {
    /// True bearing in degrees, as computed ([-180, 180)) or as declared
    pub bearing_true: f64,
    pub bearing_source: BearingSource,
    pub location: Option<GeoPoint>,
    pub style: String,
    pub color: String,
    /// Flash period in seconds
    pub rate_seconds: f64,
    /// Animation phase offset in milliseconds
    pub offset_millis: i32,
    pub height_feet: i32,
    pub visibility_nmi: i32,
    pub label: String,
    pub name: String,
    pub link: String,
    pub distance_miles: f64,
    pub distance_nmi: f64,
    /// True bearing wrapped into [0, 360)
    pub true_abs_deg: f64,
    pub true_mils: f64,
    /// Magnetic bearing wrapped into [0, 360)
    pub mag_abs_deg: f64,
    pub mag_mils: f64,
    /// Numeric fields that were missing or malformed and took their default
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaulted_fields: Vec<&'static str>,
}

impl Light {
    pub fn is_defaulted(&self, field: &str) -> bool {
        self.defaulted_fields.iter().any(|f| *f == field)
    }

    /// Magnetic bearing in the same unwrapped convention as `bearing_true`
    pub fn bearing_magnetic(&self, frame: &ReferenceFrame) -> f64 {
        self.bearing_true - frame.magnetic_offset_deg
    }
}

/// Build a [`Light`] from one input row
///
/// Never fails: numeric fields that do not parse fall back to zero and are
/// listed in [`Light::defaulted_fields`].
pub fn build_light(frame: &ReferenceFrame, row: &RawLightRow) -> Light {
    let location = match (row.number::<f64>("latitude"), row.number::<f64>("longitude")) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)),
        _ => None,
    };

    let (bearing_true, bearing_source) = match (&location, row.number::<f64>("bearing")) {
        (Some(loc), _) => (initial_bearing(&frame.home, loc), BearingSource::Geodesic),
        (None, Some(declared)) => (declared, BearingSource::Declared),
        (None, None) => {
            log::warn!(
                "Light {:?} has neither coordinates nor a bearing; placing it at 0°",
                row.text("name")
            );
            (0.0, BearingSource::Missing)
        }
    };

    let true_abs_deg = modulo(bearing_true, 360.0);
    let mag_abs_deg = modulo(bearing_true - frame.magnetic_offset_deg, 360.0);

    let distance_miles = match &location {
        Some(loc) if !loc.is_placeholder() => great_circle_distance_miles(&frame.home, loc),
        _ => 0.0,
    };

    let mut defaulted_fields = Vec::new();
    let rate = row.parse_or::<f64>("rate", 0.0);
    let offset = row.parse_or::<i32>("offset", 0);
    let height = row.parse_or::<i32>("height", 0);
    let visibility = row.parse_or::<i32>("visibility", 0);
    note_default(&mut defaulted_fields, "rate", &rate);
    note_default(&mut defaulted_fields, "offset", &offset);
    note_default(&mut defaulted_fields, "height", &height);
    note_default(&mut defaulted_fields, "visibility", &visibility);

    if !defaulted_fields.is_empty() {
        log::warn!(
            "Light {:?}: defaulted {}",
            row.text("name"),
            defaulted_fields.join(", ")
        );
    }

    Light {
        bearing_true,
        bearing_source,
        location,
        style: row.text("style"),
        color: row.text("color"),
        rate_seconds: rate.value(),
        offset_millis: offset.value(),
        height_feet: height.value(),
        visibility_nmi: visibility.value(),
        label: row.text("label"),
        name: row.text("name"),
        link: row.text("link"),
        distance_miles,
        distance_nmi: distance_miles * FEET_PER_STATUTE_MILE / FEET_PER_NAUTICAL_MILE,
        true_abs_deg,
        true_mils: degrees_to_mils(true_abs_deg),
        mag_abs_deg,
        mag_mils: degrees_to_mils(mag_abs_deg),
        defaulted_fields,
    }
}

fn note_default<T: Copy>(fields: &mut Vec<&'static str>, name: &'static str, value: &ParsedField<T>) {
    if value.is_defaulted() {
        fields.push(name);
    }
}
