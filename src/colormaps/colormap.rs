//! Color map data structures and sampling.
//!
//! A [`ColorMap`] is a piecewise-linear value→color function defined by an
//! ordered list of [`ControlPoint`]s.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use super::gradient::{two_color_points, unicolor_points};
use super::spectrum::spectrum_points;
use super::style::{ColorMapKind, ColorMapStyle};
use crate::error::{ColorStripError, Result};
use crate::grid::ScalarGrid;
use crate::logging::{generate_id, log_error, log_timed_operation};

/// An RGB color with channels nominally in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
    /// Returned when sampling a map without control points
    pub const MID_GRAY: Rgb = Rgb::new(0.5, 0.5, 0.5);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Largest of the three channels
    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Whether every channel is finite
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Convert to an opaque 8-bit RGBA pixel, clamping out-of-range channels
    pub fn to_rgba8(&self) -> [u8; 4] {
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), 255]
    }
}

/// One `(value, color)` pair of a color map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub value: f64,
    pub color: Rgb,
}

impl ControlPoint {
    pub fn new(value: f64, color: Rgb) -> Self {
        Self { value, color }
    }
}

/// Linear interpolation between two colors
pub fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        c1.r * (1.0 - t) + c2.r * t,
        c1.g * (1.0 - t) + c2.g * t,
        c1.b * (1.0 - t) + c2.b * t,
    )
}

/// Ordered collection of control points.
///
/// Points are sorted ascending by value once, after bulk insertion. Equal
/// values keep their insertion order. Every instance carries an identity
/// that renderers use to detect replacement.
#[derive(Debug, Clone)]
pub struct ColorMap {
    id: Uuid,
    style: ColorMapStyle,
    points: Vec<ControlPoint>,
}

impl ColorMap {
    fn assemble(style: ColorMapStyle, mut points: Vec<ControlPoint>) -> Self {
        points.sort_by(|a, b| a.value.total_cmp(&b.value));
        let map = Self {
            id: generate_id(),
            style,
            points,
        };
        debug!(
            operation = "colormap_build",
            id = %map.id,
            kind = %map.style.kind,
            points = map.points.len(),
            min = ?map.min_value(),
            max = ?map.max_value(),
            "Color map built"
        );
        map
    }

    /// Build a map from explicit control points, in any order
    pub fn from_points(style: ColorMapStyle, points: Vec<ControlPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(ColorStripError::InvalidParameter {
                param: "points".to_string(),
                message: "a color map needs at least one control point".to_string(),
            });
        }
        Ok(Self::assemble(style, points))
    }

    /// Build a map spanning `[min_value, max_value]` with the strategy
    /// selected by `style.kind`
    pub fn from_bounds(style: &ColorMapStyle, min_value: f64, max_value: f64) -> Self {
        let points = match style.kind {
            ColorMapKind::Multicolor => spectrum_points(min_value, max_value, style.spectrum),
            ColorMapKind::TwoColor => {
                two_color_points(min_value, max_value, style.first_color, style.second_color)
            }
            ColorMapKind::Unicolor => unicolor_points(min_value, max_value, style.single_color),
        };
        Self::assemble(style.clone(), points)
    }

    /// Build a map spanning the full value range of a grid's scalar field
    pub fn from_grid(style: &ColorMapStyle, grid: Option<&ScalarGrid>) -> Result<Self> {
        let Some(grid) = grid else {
            let error = ColorStripError::GridUnavailable;
            log_error(&error, "colormap_from_grid");
            return Err(error);
        };
        let (min_value, max_value) = log_timed_operation("grid_scan", || grid.value_range());
        Ok(Self::from_bounds(style, min_value, max_value))
    }

    /// Multicolor spectrum over `[min_value, max_value]` with default steps
    pub fn multicolor(min_value: f64, max_value: f64) -> Self {
        Self::from_bounds(&ColorMapStyle::multicolor(), min_value, max_value)
    }

    /// `color1` → black → `color2` over `[min_value, max_value]`
    pub fn two_color(min_value: f64, max_value: f64, color1: Rgb, color2: Rgb) -> Self {
        Self::from_bounds(&ColorMapStyle::two_color(color1, color2), min_value, max_value)
    }

    /// `color` → black over `[min_value, max_value]`
    pub fn unicolor(min_value: f64, max_value: f64, color: Rgb) -> Self {
        Self::from_bounds(&ColorMapStyle::unicolor(color), min_value, max_value)
    }

    /// A fresh map with the same style over new bounds
    pub fn with_bounds(&self, min_value: f64, max_value: f64) -> Self {
        Self::from_bounds(&self.style, min_value, max_value)
    }

    /// Identity of this instance
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Style the map was built with
    pub fn style(&self) -> &ColorMapStyle {
        &self.style
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Control points, sorted ascending by value
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Value of the first control point
    pub fn min_value(&self) -> Option<f64> {
        self.points.first().map(|p| p.value)
    }

    /// Value of the last control point
    pub fn max_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }

    /// Color of the map at `value`.
    ///
    /// Values outside the covered range take the color of the nearest end.
    /// Inside, the earliest bracketing pair of points is interpolated
    /// linearly; a zero-width pair yields its lower color.
    pub fn sample(&self, value: f64) -> Rgb {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgb::MID_GRAY,
        };
        if value <= first.value {
            return first.color;
        }
        if value >= last.value {
            return last.color;
        }
        let n = self.points.len();
        if n < 2 {
            return first.color;
        }

        let k = (1..n - 1)
            .find(|&i| value >= self.points[i].value && value <= self.points[i + 1].value)
            .unwrap_or(0);
        let lower = &self.points[k];
        let upper = &self.points[k + 1];

        let span = upper.value - lower.value;
        let below = value - lower.value;
        let above = span - below;
        if span > 0.0 && below >= 0.0 && above >= 0.0 {
            lerp_color(lower.color, upper.color, below / span)
        } else {
            lower.color
        }
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of colors = {}", self.points.len())?;
        for point in &self.points {
            writeln!(
                f,
                "{:.6} {:.2} {:.2} {:.2}",
                point.value, point.color.r, point.color.g, point.color.b
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_to_white() -> ColorMap {
        ColorMap::from_points(
            ColorMapStyle::default(),
            vec![
                ControlPoint::new(10.0, Rgb::WHITE),
                ControlPoint::new(0.0, Rgb::BLACK),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lerp_color() {
        let mid = lerp_color(Rgb::BLACK, Rgb::WHITE, 0.5);
        assert_eq!(mid, Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_from_points_sorts() {
        let map = black_to_white();
        assert_eq!(map.min_value(), Some(0.0));
        assert_eq!(map.max_value(), Some(10.0));
        assert_eq!(map.points()[0].color, Rgb::BLACK);
    }

    #[test]
    fn test_from_points_rejects_empty() {
        assert!(ColorMap::from_points(ColorMapStyle::default(), Vec::new()).is_err());
    }

    #[test]
    fn test_sample_interpolates() {
        let map = black_to_white();
        let color = map.sample(5.0);
        assert!((color.r - 0.5).abs() < 1e-9);
        assert!((color.g - 0.5).abs() < 1e-9);
        assert!((color.b - 0.5).abs() < 1e-9);

        let color = map.sample(2.5);
        assert!((color.r - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_sample_clamps_at_ends() {
        let map = black_to_white();
        assert_eq!(map.sample(-100.0), Rgb::BLACK);
        assert_eq!(map.sample(0.0), Rgb::BLACK);
        assert_eq!(map.sample(10.0), Rgb::WHITE);
        assert_eq!(map.sample(1e6), Rgb::WHITE);
    }

    #[test]
    fn test_sample_tied_values_use_earliest_pair() {
        let red = Rgb::RED;
        let blue = Rgb::BLUE;
        let map = ColorMap::from_points(
            ColorMapStyle::default(),
            vec![
                ControlPoint::new(0.0, Rgb::BLACK),
                ControlPoint::new(5.0, red),
                ControlPoint::new(5.0, blue),
                ControlPoint::new(10.0, Rgb::WHITE),
            ],
        )
        .unwrap();

        // Zero-width pair (5, 5) wins and falls back to its lower color.
        assert_eq!(map.sample(5.0), red);
        // Between the tie and the end, the (blue, white) pair applies.
        let color = map.sample(7.5);
        assert!((color.r - 0.5).abs() < 1e-9);
        assert!((color.b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_single_point() {
        let map = ColorMap::from_points(
            ColorMapStyle::default(),
            vec![ControlPoint::new(1.0, Rgb::GREEN)],
        )
        .unwrap();
        assert_eq!(map.sample(0.0), Rgb::GREEN);
        assert_eq!(map.sample(2.0), Rgb::GREEN);
        assert_eq!(map.sample(f64::NAN), Rgb::GREEN);
    }

    #[test]
    fn test_sample_nan_between_points() {
        let map = black_to_white();
        assert_eq!(map.sample(f64::NAN), Rgb::BLACK);
    }

    #[test]
    fn test_with_bounds_keeps_style_and_changes_identity() {
        let map = ColorMap::unicolor(0.0, 1.0, Rgb::GREEN);
        let reset = map.with_bounds(-1.0, 1.0);

        assert_ne!(map.id(), reset.id());
        assert_eq!(reset.style(), map.style());
        assert_eq!(reset.min_value(), Some(-1.0));
        assert_eq!(reset.max_value(), Some(1.0));
    }

    #[test]
    fn test_display() {
        let text = black_to_white().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Number of colors = 2");
        assert_eq!(lines[1], "0.000000 0.00 0.00 0.00");
        assert_eq!(lines[2], "10.000000 1.00 1.00 1.00");
    }

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(Rgb::new(1.2, -0.1, 0.5).to_rgba8(), [255, 0, 128, 255]);
    }
}
