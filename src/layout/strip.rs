use serde::Serialize;

use crate::config::{BearingReference, LayoutConfig, StripPlacement};
use crate::layout::{CompassTick, DelaySource};
use crate::light::{Light, ReferenceFrame};

/// Placement of one light on the compass strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompassSlot {
    pub light_index: usize,
    pub pixel_x: f64,
    pub animation_delay_millis: i32,
    /// Whether the placed bearing falls inside the configured window;
    /// always true with [`StripPlacement::Window`]
    pub on_strip: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEntry {
    pub light: Light,
    pub slot: CompassSlot,
}

/// Everything a renderer needs, lights in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub reference: ReferenceFrame,
    pub config: LayoutConfig,
    pub ticks: Vec<CompassTick>,
    pub entries: Vec<LayoutEntry>,
}

/// Bearing used for placement, wrapped according to `config.placement`
pub fn strip_bearing(light: &Light, frame: &ReferenceFrame, config: &LayoutConfig) -> f64 {
    let bearing = match config.reference {
        BearingReference::True => light.bearing_true,
        BearingReference::Magnetic => light.bearing_magnetic(frame),
    };
    match config.placement {
        StripPlacement::Window => config.window.place(bearing),
        StripPlacement::CompassTurn => config.window.place_on_turn(bearing),
    }
}

/// Horizontal strip position of a placed bearing
pub fn pixel_x(wrapped_degrees: f64, config: &LayoutConfig) -> f64 {
    (wrapped_degrees - config.window.min()) * config.pixels_per_degree
}

/// Place every light on the strip
///
/// Produces exactly one slot per light, in input order; lights sharing a
/// bearing keep their relative order.
pub fn layout_lights(
    lights: &[Light],
    frame: &ReferenceFrame,
    config: &LayoutConfig,
    delays: &mut dyn DelaySource,
) -> Vec<CompassSlot> {
    lights
        .iter()
        .enumerate()
        .map(|(light_index, light)| {
            let wrapped = strip_bearing(light, frame, config);
            let slot = CompassSlot {
                light_index,
                pixel_x: pixel_x(wrapped, config),
                animation_delay_millis: delays.delay_millis(light_index, light),
                on_strip: config.window.contains(wrapped),
            };
            if !slot.on_strip {
                log::info!(
                    "Light {:?} at {:.1}° is outside the {} window",
                    light.name,
                    wrapped,
                    config.window
                );
            }
            log::debug!(
                "#{:03} {:?}: {:.1}° -> {:.0}px, delay {}ms",
                light_index + 1,
                light.name,
                wrapped,
                slot.pixel_x,
                slot.animation_delay_millis
            );
            slot
        })
        .collect()
}
