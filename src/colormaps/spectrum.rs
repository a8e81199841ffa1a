//! Multicolor spectrum construction.
//!
//! Walks a fixed hue cycle by additive channel steps instead of HSV math.
//! Starting from pure red, segment 0 raises green, segment 1 lowers red,
//! segment 2 raises blue and segment 3 lowers green, each step moving one
//! channel by `1/steps`. Further segments hold the last color.
//!
//! Channels are not clamped per step. With the default layout they stay in
//! `[0, 1]` up to floating-point rounding.

use super::colormap::{ControlPoint, Rgb};
use super::style::{SpectrumParams, MAX_SPECTRUM_POINTS};

/// Control points of the spectrum, evenly spaced over
/// `[min_value, max_value]`.
///
/// Layouts larger than [`MAX_SPECTRUM_POINTS`] are cut off at that many
/// points; the last one still sits at `max_value`.
pub fn spectrum_points(
    min_value: f64,
    max_value: f64,
    params: SpectrumParams,
) -> Vec<ControlPoint> {
    let n = params
        .point_count()
        .map_or(MAX_SPECTRUM_POINTS, |n| n.min(MAX_SPECTRUM_POINTS));
    let mut points = Vec::with_capacity(n);
    let mut color = Rgb::RED;
    points.push(ControlPoint::new(min_value, color));

    if n < 2 {
        return points;
    }

    let spacing = (max_value - min_value) / (n - 1) as f64;
    let delta = 1.0 / params.steps as f64;
    for k in 1..n {
        match (k - 1) / params.steps {
            0 => color.g += delta,
            1 => color.r -= delta,
            2 => color.b += delta,
            3 => color.g -= delta,
            _ => {}
        }
        points.push(ControlPoint::new(min_value + k as f64 * spacing, color));
    }

    points
}
