use crate::config::LayoutConfig;
use crate::error::{LightsError, Result};
use crate::layout::{DelaySource, Layout, LayoutEntry, compass_ticks, layout_lights};
use crate::light::{Light, RawLightRow, ReferenceFrame, build_light};

/// Turns input rows into a compass-strip [`Layout`]
///
/// The first row is the viewing location and declination; every following
/// row is one light.
pub struct LightsProcessor {
    config: LayoutConfig,
}

impl LightsProcessor {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn process(&self, rows: &[RawLightRow], delays: &mut dyn DelaySource) -> Result<Layout> {
        let (first, rest) = rows.split_first().ok_or_else(|| {
            LightsError::MissingReferenceFrame("input has no rows".to_string())
        })?;

        let reference = ReferenceFrame::from_row(first)?;
        log::info!(
            "Viewing from {:.4}, {:.4} with {:+.1}° declination",
            reference.home.latitude,
            reference.home.longitude,
            reference.magnetic_offset_deg
        );

        let lights = self.build_lights(&reference, rest);
        Ok(self.layout(reference, lights, delays))
    }

    pub fn build_lights(&self, reference: &ReferenceFrame, rows: &[RawLightRow]) -> Vec<Light> {
        rows.iter().map(|row| build_light(reference, row)).collect()
    }

    pub fn layout(
        &self,
        reference: ReferenceFrame,
        lights: Vec<Light>,
        delays: &mut dyn DelaySource,
    ) -> Layout {
        let slots = layout_lights(&lights, &reference, &self.config, delays);
        let ticks = compass_ticks(&self.config);

        let entries: Vec<LayoutEntry> = lights
            .into_iter()
            .zip(slots)
            .map(|(light, slot)| LayoutEntry { light, slot })
            .collect();

        let off_strip = entries.iter().filter(|e| !e.slot.on_strip).count();
        log::info!(
            "Laid out {} lights ({} outside the window) over {} ticks",
            entries.len(),
            off_strip,
            ticks.len()
        );

        Layout {
            reference,
            config: self.config.clone(),
            ticks,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::OffsetDelay;

    fn home_row() -> RawLightRow {
        RawLightRow::new()
            .with("latitude", "39.0")
            .with("longitude", "-75.3")
            .with("bearing", "12.0")
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let processor = LightsProcessor::new(LayoutConfig::default()).unwrap();
        let err = processor.process(&[], &mut OffsetDelay).unwrap_err();
        assert!(matches!(err, LightsError::MissingReferenceFrame(_)));
    }

    #[test]
    fn test_reference_only() {
        let processor = LightsProcessor::new(LayoutConfig::default()).unwrap();
        let layout = processor.process(&[home_row()], &mut OffsetDelay).unwrap();
        assert!(layout.entries.is_empty());
        assert_eq!(layout.ticks.len(), 186);
        assert_eq!(layout.reference.magnetic_offset_deg, 12.0);
    }

    #[test]
    fn test_entries_follow_input_order() {
        let processor = LightsProcessor::new(LayoutConfig::default()).unwrap();
        let rows = vec![
            home_row(),
            RawLightRow::new().with("name", "A").with("bearing", "40"),
            RawLightRow::new().with("name", "B").with("bearing", "-40"),
            RawLightRow::new().with("name", "C").with("bearing", "40"),
        ];
        let layout = processor.process(&rows, &mut OffsetDelay).unwrap();
        let names: Vec<&str> = layout.entries.iter().map(|e| e.light.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        for (i, entry) in layout.entries.iter().enumerate() {
            assert_eq!(entry.slot.light_index, i);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = LayoutConfig::default();
        config.pixels_per_degree = -1.0;
        assert!(LightsProcessor::new(config).is_err());
    }
}
