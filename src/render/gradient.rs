//! Horizontal linear gradients with ordered color stops.

use crate::colormaps::{lerp_color, Rgb};

/// One color stop; `offset` is in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
}

/// A gradient running horizontally from `x0` (offset 0) to `x1` (offset 1).
///
/// Outside the stop range the end colors extend (pad). Stops sharing an
/// offset form a hard edge: the later stop governs from that offset on.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    x0: f64,
    x1: f64,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn horizontal(x0: f64, x1: f64) -> Self {
        Self {
            x0,
            x1,
            stops: Vec::new(),
        }
    }

    /// Add a stop. Offsets are clamped to `[0, 1]`; stops stay ordered by
    /// offset, equal offsets in insertion order.
    pub fn add_color_stop(&mut self, offset: f64, color: Rgb) {
        let offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, 1.0)
        };
        let index = self.stops.partition_point(|stop| stop.offset <= offset);
        self.stops.insert(index, GradientStop { offset, color });
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Gradient offset of a horizontal position
    pub fn offset_at(&self, x: f64) -> f64 {
        let span = self.x1 - self.x0;
        if span.abs() < f64::EPSILON {
            return 1.0;
        }
        (x - self.x0) / span
    }

    /// Color at gradient offset `t`, or `None` without stops
    pub fn color_at(&self, t: f64) -> Option<Rgb> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;
        if t >= last.offset {
            return Some(last.color);
        }
        if t < first.offset {
            return Some(first.color);
        }

        let upper = self.stops.partition_point(|stop| stop.offset <= t);
        let lo = &self.stops[upper - 1];
        let hi = &self.stops[upper];
        let span = hi.offset - lo.offset;
        Some(lerp_color(lo.color, hi.color, (t - lo.offset) / span))
    }
}
