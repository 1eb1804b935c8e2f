//! Physical and unit-conversion constants
//!
//! Shared by the geodesy engine, the light record builder and the
//! coordinate formatter.

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.761;

/// NATO mils in a full circle.
pub const MILS_PER_CIRCLE: f64 = 6400.0;

/// Feet in a statute mile.
pub const FEET_PER_STATUTE_MILE: f64 = 5280.0;

/// Feet in a nautical mile (rounded, as used on charts).
pub const FEET_PER_NAUTICAL_MILE: f64 = 6076.0;

/// Coordinates with an absolute latitude or longitude below this are treated
/// as placeholder zeros rather than real positions.
pub const UNKNOWN_COORDINATE_THRESHOLD: f64 = 0.001;

/// Rendered in place of a coordinate string for unknown positions.
pub const UNKNOWN_LOCATION: &str = "[unknown location]";

/// Upper bound (exclusive) for randomly drawn animation delays.
pub const MAX_RANDOM_DELAY_MILLIS: u32 = 4000;
