//! Construction styles for color maps.
//!
//! The style selects which strategy builds a map and carries the colors
//! each strategy needs. It travels with every map so that a map can be
//! rebuilt over new bounds without consulting any global setting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::colormap::Rgb;
use crate::error::{ColorStripError, Result};

/// Construction strategy of a color map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMapKind {
    /// Red → yellow → green → cyan → blue spectrum
    #[default]
    Multicolor,
    /// First color → black → second color
    TwoColor,
    /// Single color → black
    Unicolor,
}

impl ColorMapKind {
    /// Map the legacy integer setting: 1 is multicolor, 2 is two-color,
    /// anything else is unicolor.
    pub fn from_type_code(code: i32) -> Self {
        match code {
            1 => ColorMapKind::Multicolor,
            2 => ColorMapKind::TwoColor,
            _ => ColorMapKind::Unicolor,
        }
    }

    /// Create a ColorMapKind from a string
    pub fn parse_kind(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "multicolor" | "spectrum" => Ok(ColorMapKind::Multicolor),
            "two-color" | "2colors" | "twocolor" => Ok(ColorMapKind::TwoColor),
            "unicolor" | "single" => Ok(ColorMapKind::Unicolor),
            _ => Err(ColorStripError::InvalidParameter {
                param: "kind".to_string(),
                message: format!(
                    "Unknown color map kind: {}. Must be one of: multicolor, two-color, unicolor",
                    s
                ),
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ColorMapKind::Multicolor => "multicolor",
            ColorMapKind::TwoColor => "two-color",
            ColorMapKind::Unicolor => "unicolor",
        }
    }
}

impl FromStr for ColorMapKind {
    type Err = ColorStripError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ColorMapKind::parse_kind(s)
    }
}

impl fmt::Display for ColorMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Largest number of control points a spectrum may produce
pub const MAX_SPECTRUM_POINTS: usize = 1 << 16;

/// Step layout of the multicolor spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectrumParams {
    /// Number of hue segments (`ns`)
    #[serde(default = "default_segments")]
    pub segments: usize,
    /// Steps per segment (`nc`)
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl SpectrumParams {
    /// Number of control points the spectrum produces, or `None` if it
    /// does not fit in a `usize`
    pub fn point_count(&self) -> Option<usize> {
        self.segments.checked_mul(self.steps)?.checked_add(1)
    }
}

impl Default for SpectrumParams {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            steps: default_steps(),
        }
    }
}

/// Everything needed to build a color map over given bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMapStyle {
    /// Construction strategy
    #[serde(default)]
    pub kind: ColorMapKind,

    /// Low-end color of the two-color map
    #[serde(default = "default_first_color")]
    pub first_color: Rgb,

    /// High-end color of the two-color map
    #[serde(default = "default_second_color")]
    pub second_color: Rgb,

    /// Low-end color of the unicolor map
    #[serde(default = "default_single_color")]
    pub single_color: Rgb,

    /// Multicolor step layout
    #[serde(default)]
    pub spectrum: SpectrumParams,
}

impl ColorMapStyle {
    pub fn multicolor() -> Self {
        Self::default()
    }

    pub fn two_color(first_color: Rgb, second_color: Rgb) -> Self {
        Self {
            kind: ColorMapKind::TwoColor,
            first_color,
            second_color,
            ..Self::default()
        }
    }

    pub fn unicolor(single_color: Rgb) -> Self {
        Self {
            kind: ColorMapKind::Unicolor,
            single_color,
            ..Self::default()
        }
    }

    /// Validate the style
    pub fn validate(&self) -> Result<()> {
        for (param, color) in [
            ("first_color", self.first_color),
            ("second_color", self.second_color),
            ("single_color", self.single_color),
        ] {
            if !color.is_finite() {
                return Err(ColorStripError::InvalidParameter {
                    param: param.to_string(),
                    message: format!("color channels must be finite, got {:?}", color),
                });
            }
        }

        if self.spectrum.segments == 0 || self.spectrum.steps == 0 {
            return Err(ColorStripError::InvalidParameter {
                param: "spectrum".to_string(),
                message: "segments and steps must both be at least 1".to_string(),
            });
        }

        match self.spectrum.point_count() {
            Some(n) if n <= MAX_SPECTRUM_POINTS => {}
            _ => {
                return Err(ColorStripError::InvalidParameter {
                    param: "spectrum".to_string(),
                    message: format!(
                        "{} segments of {} steps exceed {} control points",
                        self.spectrum.segments, self.spectrum.steps, MAX_SPECTRUM_POINTS
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for ColorMapStyle {
    fn default() -> Self {
        Self {
            kind: ColorMapKind::default(),
            first_color: default_first_color(),
            second_color: default_second_color(),
            single_color: default_single_color(),
            spectrum: SpectrumParams::default(),
        }
    }
}

// Default value functions for serde
fn default_segments() -> usize {
    4
}

fn default_steps() -> usize {
    20
}

fn default_first_color() -> Rgb {
    Rgb::BLUE
}

fn default_second_color() -> Rgb {
    Rgb::RED
}

fn default_single_color() -> Rgb {
    Rgb::WHITE
}
