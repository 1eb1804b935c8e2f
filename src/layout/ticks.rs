use serde::Serialize;

use crate::config::LayoutConfig;
use crate::geo::modulo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickKind {
    Major,
    Minor,
    Plain,
}

/// One compass graduation on the strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompassTick {
    /// Degree in the window's convention (may be negative)
    pub degree: i32,
    pub pixel_x: f64,
    pub kind: TickKind,
    /// Compass reading (`0°`..`359°`), only on major and minor ticks
    pub label: Option<String>,
}

/// One tick per integer degree in `[min, max]`, inclusive at both ends
///
/// Spacing is counted from the window start, so a `[-95, 90]` window gets
/// its major ticks at 265°, 310°, 355°, 40° and 85°.
pub fn compass_ticks(config: &LayoutConfig) -> Vec<CompassTick> {
    let window = &config.window;
    let first = window.min().ceil() as i32;
    let last = window.max().floor() as i32;
    let start = window.min();

    (first..=last)
        .map(|degree| {
            let steps = i64::from(degree) - start.ceil() as i64;
            let kind = if steps % i64::from(config.major_tick_every) == 0 {
                TickKind::Major
            } else if steps % i64::from(config.minor_tick_every) == 0 {
                TickKind::Minor
            } else {
                TickKind::Plain
            };
            let label = match kind {
                TickKind::Plain => None,
                _ => Some(format!("{}°", modulo(f64::from(degree), 360.0))),
            };
            CompassTick {
                degree,
                pixel_x: (f64::from(degree) - start) * config.pixels_per_degree,
                kind,
                label,
            }
        })
        .collect()
}
