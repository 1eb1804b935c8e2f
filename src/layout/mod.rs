pub mod delay;
pub mod strip;
pub mod ticks;

pub use delay::{DelaySource, OffsetDelay};
pub use strip::{CompassSlot, Layout, LayoutEntry, layout_lights, pixel_x, strip_bearing};
pub use ticks::{CompassTick, TickKind, compass_ticks};

#[cfg(feature = "random-delay")]
pub use delay::RandomDelay;
