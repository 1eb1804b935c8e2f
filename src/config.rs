//! Compass-strip layout configuration.
//!
//! Two presets mirror the two strip styles in use:
//!
//! ```ignore
//! LayoutConfig::detailed();   // [-95, 90) at 30 px/degree
//! LayoutConfig::simplified(); // [-90, 90] at 20 px/degree
//! ```
//!
//! Either can be adjusted from a TOML file (see [`LayoutConfig::from_toml_str`])
//! or field by field.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_RANDOM_DELAY_MILLIS;
use crate::error::{LightsError, Result};
use crate::geo::wrap;

/// Degree window covered by the compass strip, `[min, max)` or `[min, max]`
///
/// # Parsing formats
/// - `-95..90` - half-open, minimum and maximum degree separated by `..`
/// - `-90..=90` - closed, the maximum degree is part of the window
///
/// # Example
/// ```
/// use baylights::config::DegreeWindow;
///
/// let window: DegreeWindow = "-95..90".parse().unwrap();
/// assert_eq!(window.min(), -95.0);
/// assert_eq!(window.place(10.0), 10.0);
/// assert_eq!(window.place(100.0), -85.0);
/// assert_eq!(window.place_on_turn(-170.0), 190.0);
/// assert!(!window.contains(190.0));
///
/// let closed: DegreeWindow = "-90..=90".parse().unwrap();
/// assert!(closed.contains(90.0));
/// assert_eq!(closed.place(90.0), 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DegreeWindow {
    min: f64,
    max: f64,
    includes_max: bool,
}

impl DegreeWindow {
    /// Create a half-open window `[min, max)`, rejecting empty or inverted ranges
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || max <= min {
            return Err(LightsError::DegenerateAngleRange { min, max });
        }
        Ok(Self {
            min,
            max,
            includes_max: false,
        })
    }

    /// Create a closed window `[min, max]`
    pub fn closed(min: f64, max: f64) -> Result<Self> {
        Ok(Self {
            includes_max: true,
            ..Self::new(min, max)?
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn includes_max(&self) -> bool {
        self.includes_max
    }

    /// Wrap a bearing into the window, with the window span as the period
    ///
    /// Bearings already inside the window, including `max` of a closed
    /// window, are returned unchanged.
    pub fn place(&self, degrees: f64) -> f64 {
        if self.contains(degrees) {
            degrees
        } else {
            wrap(degrees, self.min, self.max)
        }
    }

    /// Bring a bearing onto the full compass turn `[min, min + 360)`
    ///
    /// Bearings the window does not cover land past `max`.
    pub fn place_on_turn(&self, degrees: f64) -> f64 {
        if self.contains(degrees) {
            degrees
        } else {
            wrap(degrees, self.min, self.min + 360.0)
        }
    }

    pub fn contains(&self, degrees: f64) -> bool {
        self.min <= degrees && (degrees < self.max || (self.includes_max && degrees == self.max))
    }
}

impl fmt::Display for DegreeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.includes_max { "..=" } else { ".." };
        write!(f, "{}{}{}", self.min, sep, self.max)
    }
}

impl FromStr for DegreeWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (min, max) = s
            .trim()
            .split_once("..")
            .ok_or_else(|| format!("invalid window (expected MIN..MAX or MIN..=MAX): {}", s))?;
        let (max, closed) = match max.strip_prefix('=') {
            Some(max) => (max, true),
            None => (max, false),
        };
        let min: f64 = min
            .trim()
            .parse()
            .map_err(|_| format!("invalid window minimum: {}", min))?;
        let max: f64 = max
            .trim()
            .parse()
            .map_err(|_| format!("invalid window maximum: {}", max))?;
        let window = if closed {
            Self::closed(min, max)
        } else {
            Self::new(min, max)
        };
        window.map_err(|e| e.to_string())
    }
}

/// How bearings outside the window are put on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StripPlacement {
    /// Wrap into the window itself; every light lands on the strip
    #[default]
    Window,
    /// Wrap onto the compass turn starting at the window minimum; lights
    /// outside the window land past the strip end
    CompassTurn,
}

/// Which north the strip is laid out against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BearingReference {
    /// Geographic north
    True,
    /// Magnetic north (true bearing minus declination)
    Magnetic,
}

/// Named layout presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreset {
    /// `[-95, 90)` at 30 px/degree
    Detailed,
    /// `[-90, 90]` at 20 px/degree
    Simplified,
}

/// Compass-strip layout configuration
///
/// # Example
/// ```
/// use baylights::config::{BearingReference, LayoutConfig};
///
/// let mut config = LayoutConfig::default();
/// config.reference = BearingReference::Magnetic;
/// assert_eq!(config.pixels_per_degree, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    /// Degree window spanned by the strip
    pub window: DegreeWindow,
    /// Horizontal scale in pixels per degree
    pub pixels_per_degree: f64,
    /// Bearing used for placement
    pub reference: BearingReference,
    /// Wrapping rule for bearings outside the window
    pub placement: StripPlacement,
    /// Major labelled tick every N degrees from the window start
    pub major_tick_every: u32,
    /// Minor labelled tick every N degrees from the window start
    pub minor_tick_every: u32,
    /// Exclusive upper bound for random animation delays
    pub max_random_delay_millis: u32,
}

impl LayoutConfig {
    pub fn detailed() -> Self {
        Self {
            window: DegreeWindow {
                min: -95.0,
                max: 90.0,
                includes_max: false,
            },
            pixels_per_degree: 30.0,
            reference: BearingReference::True,
            placement: StripPlacement::Window,
            major_tick_every: 45,
            minor_tick_every: 5,
            max_random_delay_millis: MAX_RANDOM_DELAY_MILLIS,
        }
    }

    pub fn simplified() -> Self {
        Self {
            window: DegreeWindow {
                min: -90.0,
                max: 90.0,
                includes_max: true,
            },
            pixels_per_degree: 20.0,
            ..Self::detailed()
        }
    }

    pub fn from_preset(preset: LayoutPreset) -> Self {
        match preset {
            LayoutPreset::Detailed => Self::detailed(),
            LayoutPreset::Simplified => Self::simplified(),
        }
    }

    /// Check the invariants the layout engine relies on
    pub fn validate(&self) -> Result<()> {
        if !(self.pixels_per_degree.is_finite() && self.pixels_per_degree > 0.0) {
            return Err(LightsError::Config(format!(
                "pixels_per_degree must be positive, got {}",
                self.pixels_per_degree
            )));
        }
        if self.major_tick_every == 0 || self.minor_tick_every == 0 {
            return Err(LightsError::Config(
                "tick spacing must be at least one degree".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from TOML, starting from the preset named in the file (or
    /// [`LayoutConfig::detailed`]) and overriding whichever keys are present
    ///
    /// ```
    /// use baylights::config::LayoutConfig;
    ///
    /// let config = LayoutConfig::from_toml_str(r#"
    ///     preset = "simplified"
    ///     pixels_per_degree = 25.0
    ///     reference = "magnetic"
    /// "#).unwrap();
    /// assert_eq!(config.window.min(), -90.0);
    /// assert_eq!(config.pixels_per_degree, 25.0);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: LayoutFile =
            toml::from_str(s).map_err(|e| LightsError::Config(e.to_string()))?;
        file.into_config()
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::detailed()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    preset: Option<LayoutPreset>,
    min_degree: Option<f64>,
    max_degree: Option<f64>,
    include_max_degree: Option<bool>,
    pixels_per_degree: Option<f64>,
    reference: Option<BearingReference>,
    placement: Option<StripPlacement>,
    major_tick_every: Option<u32>,
    minor_tick_every: Option<u32>,
    max_random_delay_millis: Option<u32>,
}

impl LayoutFile {
    fn into_config(self) -> Result<LayoutConfig> {
        let mut config = LayoutConfig::from_preset(self.preset.unwrap_or(LayoutPreset::Detailed));

        if self.min_degree.is_some() || self.max_degree.is_some() || self.include_max_degree.is_some()
        {
            let min = self.min_degree.unwrap_or(config.window.min);
            let max = self.max_degree.unwrap_or(config.window.max);
            config.window = if self.include_max_degree.unwrap_or(config.window.includes_max) {
                DegreeWindow::closed(min, max)?
            } else {
                DegreeWindow::new(min, max)?
            };
        }
        if let Some(scale) = self.pixels_per_degree {
            config.pixels_per_degree = scale;
        }
        if let Some(reference) = self.reference {
            config.reference = reference;
        }
        if let Some(placement) = self.placement {
            config.placement = placement;
        }
        if let Some(every) = self.major_tick_every {
            config.major_tick_every = every;
        }
        if let Some(every) = self.minor_tick_every {
            config.minor_tick_every = every;
        }
        if let Some(max) = self.max_random_delay_millis {
            config.max_random_delay_millis = max;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_from_str() {
        let window: DegreeWindow = "-95..90".parse().unwrap();
        assert_eq!(window.min(), -95.0);
        assert_eq!(window.max(), 90.0);
        assert_eq!(window.span(), 185.0);

        let window: DegreeWindow = " -180.5 .. 179.5 ".parse().unwrap();
        assert_eq!(window.min(), -180.5);
    }

    #[test]
    fn test_window_place() {
        let window = DegreeWindow::new(-95.0, 90.0).unwrap();
        assert_eq!(window.place(-95.0), -95.0);
        assert_eq!(window.place(89.5), 89.5);
        assert_eq!(window.place(90.0), -95.0);
        assert_eq!(window.place(100.0), -85.0);
        assert_eq!(window.place(-160.0), 25.0);
        assert_eq!(window.place(455.0), 85.0);
        assert!(window.contains(-95.0));
        assert!(window.contains(89.999));
        assert!(!window.contains(90.0));
        assert!(!window.contains(200.0));
    }

    #[test]
    fn test_window_place_on_turn() {
        let window = DegreeWindow::new(-95.0, 90.0).unwrap();
        assert_eq!(window.place_on_turn(89.5), 89.5);
        assert_eq!(window.place_on_turn(-160.0), 200.0);
        assert_eq!(window.place_on_turn(455.0), 95.0);
    }

    #[test]
    fn test_closed_window() {
        let window = DegreeWindow::closed(-90.0, 90.0).unwrap();
        assert!(window.includes_max());
        assert!(window.contains(90.0));
        assert!(!window.contains(90.001));
        assert_eq!(window.place(90.0), 90.0);
        assert_eq!(window.place(-90.0), -90.0);
        assert_eq!(window.place(100.0), -80.0);
        assert_eq!(window.to_string(), "-90..=90");

        let parsed: DegreeWindow = "-90..=90".parse().unwrap();
        assert_eq!(parsed, window);
        assert!(DegreeWindow::closed(10.0, 10.0).is_err());
    }

    #[test]
    fn test_window_invalid() {
        assert!("abc".parse::<DegreeWindow>().is_err());
        assert!("90..-95".parse::<DegreeWindow>().is_err());
        assert!("10..10".parse::<DegreeWindow>().is_err());
        assert!("-95:90".parse::<DegreeWindow>().is_err());
    }

    #[test]
    fn test_degenerate_window_error() {
        let err = DegreeWindow::new(5.0, 5.0).unwrap_err();
        assert!(matches!(
            err,
            LightsError::DegenerateAngleRange { min, max } if min == 5.0 && max == 5.0
        ));
    }

    #[test]
    fn test_presets() {
        let detailed = LayoutConfig::default();
        assert_eq!(detailed.window.min(), -95.0);
        assert_eq!(detailed.window.max(), 90.0);
        assert_eq!(detailed.pixels_per_degree, 30.0);

        assert!(!detailed.window.includes_max());
        assert_eq!(detailed.placement, StripPlacement::Window);

        let simplified = LayoutConfig::from_preset(LayoutPreset::Simplified);
        assert_eq!(simplified.window.min(), -90.0);
        assert!(simplified.window.includes_max());
        assert_eq!(simplified.pixels_per_degree, 20.0);
        assert_eq!(simplified.reference, BearingReference::True);
    }

    #[test]
    fn test_toml_overrides() {
        let config = LayoutConfig::from_toml_str(
            r#"
            min_degree = -180.0
            max_degree = 180.0
            reference = "magnetic"
            "#,
        )
        .unwrap();
        assert_eq!(config.window.min(), -180.0);
        assert_eq!(config.window.max(), 180.0);
        assert_eq!(config.pixels_per_degree, 30.0);
        assert_eq!(config.reference, BearingReference::Magnetic);
        assert_eq!(config.placement, StripPlacement::Window);
    }

    #[test]
    fn test_toml_placement_and_closed_window() {
        let config = LayoutConfig::from_toml_str(
            r#"
            placement = "compass-turn"
            include_max_degree = true
            "#,
        )
        .unwrap();
        assert_eq!(config.placement, StripPlacement::CompassTurn);
        assert_eq!(config.window.to_string(), "-95..=90");

        let simplified = LayoutConfig::from_toml_str(
            r#"
            preset = "simplified"
            min_degree = -100.0
            "#,
        )
        .unwrap();
        assert!(simplified.window.includes_max());
        assert_eq!(simplified.window.min(), -100.0);
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(LayoutConfig::from_toml_str("pixels_per_degree = 0.0").is_err());
        assert!(LayoutConfig::from_toml_str("minor_tick_every = 0").is_err());
        assert!(LayoutConfig::from_toml_str("min_degree = 100.0").is_err());
        assert!(LayoutConfig::from_toml_str("colour = \"red\"").is_err());
    }
}
