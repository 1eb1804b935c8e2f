pub mod angle;
pub mod dms;
pub mod geodesy;

pub use angle::{degrees_to_mils, modulo, wrap};
pub use dms::{Dms, format_location};
pub use geodesy::{GeoPoint, great_circle_distance_miles, initial_bearing};
