pub mod field;
pub mod record;
pub mod reference;

pub use field::{ParsedField, RawLightRow};
pub use record::{BearingSource, Light, build_light};
pub use reference::ReferenceFrame;
