use rolling_stats::Stats;

use super::{Artifact, Renderer};
use crate::error::Result;
use crate::layout::Layout;

/// Plain-text table of lights with a distance summary
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, layout: &Layout) -> Result<Vec<Artifact>> {
        let reference = &layout.reference;
        let mut lines = vec![
            format!(
                "Home: {:.4}, {:.4}  declination {:+.1}°  window {} @ {} px/°",
                reference.home.latitude,
                reference.home.longitude,
                reference.magnetic_offset_deg,
                layout.config.window,
                layout.config.pixels_per_degree
            ),
            format!(
                "{:>3} {:<32} {:>7} {:>6} {:>7} {:>6} {:>8} {:>8} {:>7}",
                "#", "Name", "True", "Mils", "Mag", "Mils", "Miles", "NMi", "X"
            ),
            "-".repeat(92),
        ];

        let mut distances: Stats<f64> = Stats::new();
        for entry in &layout.entries {
            let light = &entry.light;
            if light.location.is_some_and(|loc| !loc.is_placeholder()) {
                distances.update(light.distance_miles);
            }
            let x = if entry.slot.on_strip {
                format!("{:.0}", entry.slot.pixel_x)
            } else {
                "-".to_string()
            };
            lines.push(format!(
                "{:>3} {:<32} {:>6.1}° {:>6.0} {:>6.1}° {:>6.0} {:>8.1} {:>8.1} {:>7}",
                entry.slot.light_index + 1,
                light.name,
                light.true_abs_deg,
                light.true_mils,
                light.mag_abs_deg,
                light.mag_mils,
                light.distance_miles,
                light.distance_nmi,
                x
            ));
        }

        lines.push(String::new());
        if distances.count == 0 {
            lines.push("No located lights".to_string());
        } else {
            lines.push(format!(
                "{} located lights: mean {:.1} mi, min {:.1} mi, max {:.1} mi",
                distances.count, distances.mean, distances.min, distances.max
            ));
        }

        let mut contents = lines.join("\n");
        contents.push('\n');
        Ok(vec![Artifact {
            file_name: "lights.txt",
            contents,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayoutConfig, StripPlacement};
    use crate::layout::OffsetDelay;
    use crate::light::RawLightRow;
    use crate::processing::LightsProcessor;

    #[test]
    fn test_text_report() {
        let rows = vec![
            RawLightRow::new()
                .with("latitude", "39.0")
                .with("longitude", "-75.3")
                .with("bearing", "0"),
            RawLightRow::new()
                .with("name", "North One")
                .with("latitude", "40.0")
                .with("longitude", "-75.3"),
            RawLightRow::new().with("name", "Declared").with("bearing", "180"),
        ];
        let processor = LightsProcessor::new(LayoutConfig::default()).unwrap();
        let layout = processor.process(&rows, &mut OffsetDelay).unwrap();

        let artifacts = TextRenderer.render(&layout).unwrap();
        let text = &artifacts[0].contents;
        assert_eq!(artifacts[0].file_name, "lights.txt");

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Home: 39.0000, -75.3000"));
        assert!(lines[3].contains("North One"));
        assert!(lines[3].contains("69.1"));
        assert!(lines[4].contains("Declared"));
        assert!(lines[4].contains("3200"));
        // wrap(180, -95, 90) = -5
        assert!(lines[4].trim_end().ends_with("2700"));
        assert!(text.contains("1 located lights: mean 69.1 mi"));
        assert!(text.ends_with("mi\n"));
    }

    #[test]
    fn test_off_strip_and_placeholder_lights() {
        let rows = vec![
            RawLightRow::new()
                .with("latitude", "39.0")
                .with("longitude", "-75.3")
                .with("bearing", "0"),
            RawLightRow::new()
                .with("name", "Placeholder")
                .with("latitude", "0")
                .with("longitude", "0"),
            RawLightRow::new().with("name", "Behind").with("bearing", "180"),
        ];
        let mut config = LayoutConfig::default();
        config.placement = StripPlacement::CompassTurn;
        let layout = LightsProcessor::new(config)
            .unwrap()
            .process(&rows, &mut OffsetDelay)
            .unwrap();

        let text = &TextRenderer.render(&layout).unwrap()[0].contents;
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[4].contains("Behind"));
        assert!(lines[4].trim_end().ends_with('-'));
        assert!(text.contains("No located lights"));
    }
}
