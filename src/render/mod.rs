//! Gradient strip rendering.
//!
//! The renderer draws a color map as a horizontal strip with three value
//! labels and keeps the result cached per host widget. Drawing goes through
//! the [`DrawSurface`] trait; the host widget is reached through
//! [`HostWidget`].

pub mod font;
pub mod gradient;
pub mod strip;
pub mod surface;

pub use gradient::{GradientStop, LinearGradient};
pub use strip::{rasterize_strip, tick_marks, GradientCache, GradientStrip, TickMark};
pub use surface::RasterSurface;

use crate::colormaps::Rgb;

/// A 2-D drawing target
pub trait DrawSurface {
    /// Pixel size `(width, height)`
    fn size(&self) -> (u32, u32);

    /// Fill a rectangle with a flat color
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);

    /// Fill a rectangle with a horizontal gradient
    fn fill_linear_gradient(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        gradient: &LinearGradient,
    );

    /// Draw a single line of text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb);

    /// Pixel extent of a single line of text
    fn text_extent(&self, text: &str) -> (u32, u32);

    /// Composite `source` with its top-left corner at `(x, y)`
    fn blit(&mut self, source: &RasterSurface, x: i32, y: i32);

    /// Fill the whole surface
    fn paint(&mut self, color: Rgb) {
        let (width, height) = self.size();
        self.fill_rect(0, 0, width, height, color);
    }
}

/// The host widget a strip is shown in
pub trait HostWidget {
    /// Current allocated size in pixels; may be zero or negative before the
    /// first layout pass
    fn allocated_size(&self) -> (i32, i32);

    /// Schedule a redraw of the widget
    fn queue_draw(&mut self);
}

/// A widget with a fixed size that counts redraw requests.
///
/// Used for offscreen rendering, where nothing is on screen to invalidate.
#[derive(Debug, Clone, Default)]
pub struct OffscreenWidget {
    pub width: i32,
    pub height: i32,
    pub redraw_requests: usize,
}

impl OffscreenWidget {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            redraw_requests: 0,
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}

impl HostWidget for OffscreenWidget {
    fn allocated_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn queue_draw(&mut self) {
        self.redraw_requests += 1;
    }
}
