//! Two-color and single-color gradients through black.

use super::colormap::{ControlPoint, Rgb};

/// Colors whose brightest channel is below this are treated as black
pub const BLACK_THRESHOLD: f64 = 1e-3;

/// Scale a color so that its brightest channel becomes 1.0.
///
/// Effectively black colors cannot be scaled and become white instead.
pub fn normalize_color(color: Rgb) -> Rgb {
    let max = color.max_channel();
    if max < BLACK_THRESHOLD {
        return Rgb::WHITE;
    }
    Rgb::new(color.r / max, color.g / max, color.b / max)
}

/// `color1` at `min_value`, black at the midpoint, `color2` at `max_value`
pub fn two_color_points(
    min_value: f64,
    max_value: f64,
    color1: Rgb,
    color2: Rgb,
) -> Vec<ControlPoint> {
    vec![
        ControlPoint::new(min_value, normalize_color(color1)),
        ControlPoint::new(min_value + (max_value - min_value) / 2.0, Rgb::BLACK),
        ControlPoint::new(max_value, normalize_color(color2)),
    ]
}

/// `color` at `min_value`, black at `max_value`
pub fn unicolor_points(min_value: f64, max_value: f64, color: Rgb) -> Vec<ControlPoint> {
    vec![
        ControlPoint::new(min_value, normalize_color(color)),
        ControlPoint::new(max_value, Rgb::BLACK),
    ]
}
