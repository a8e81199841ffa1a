//! Cached gradient strip.
//!
//! The strip is rasterized once per `(width, height, color map)` and reused
//! until the widget is resized or the map is replaced. There is no partial
//! update: any change discards the raster and rebuilds it.

use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

use super::gradient::LinearGradient;
use super::surface::RasterSurface;
use super::{DrawSurface, HostWidget};
use crate::colormaps::{ColorMap, Rgb};
use crate::format::format_tick_value;

/// Fill used when there is no color map to draw
pub const PLACEHOLDER_GRAY: Rgb = Rgb::new(0.8, 0.8, 0.8);

/// Caption drawn by [`GradientStrip::draw`] before any raster exists
pub const PLACEHOLDER_TEXT: &str = "Color Map";

/// Number of value labels along the strip
pub const TICK_COUNT: usize = 3;

/// Ranges narrower than this collapse every stop onto one offset
const MIN_RANGE: f64 = 1e-20;

/// Label offset from the tick position, and from the bottom edge
const LABEL_DX: i32 = 2;
const LABEL_BOTTOM: i32 = 16;

/// A value label on the strip
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Horizontal position in pixels
    pub x: f64,
    /// Map value at that position
    pub value: f64,
    /// Formatted value
    pub label: String,
}

/// Labels at a quarter, half and three quarters of the strip width
pub fn tick_marks(min_value: f64, max_value: f64, width: u32) -> Vec<TickMark> {
    let width = width as f64;
    (1..=TICK_COUNT)
        .map(|t| {
            let x = width * t as f64 / (TICK_COUNT + 1) as f64;
            let value = min_value + (max_value - min_value) * (x / width);
            TickMark {
                x,
                value,
                label: format_tick_value(value),
            }
        })
        .collect()
}

/// Rasterize `map` into a fresh `width x height` surface.
///
/// Without a map, or with an empty one, the strip is a flat gray
/// placeholder.
pub fn rasterize_strip(map: Option<&ColorMap>, width: u32, height: u32) -> RasterSurface {
    let mut surface = RasterSurface::new(width, height);
    surface.paint(Rgb::WHITE);

    let bounds = map.and_then(|m| Some((m, m.min_value()?, m.max_value()?)));
    let Some((map, min_value, max_value)) = bounds else {
        surface.fill_rect(0, 0, width, height, PLACEHOLDER_GRAY);
        return surface;
    };

    let mut range = max_value - min_value;
    if range < MIN_RANGE {
        range = 1.0;
    }

    let mut gradient = LinearGradient::horizontal(0.0, width as f64);
    for point in map.points() {
        gradient.add_color_stop((point.value - min_value) / range, point.color);
    }
    surface.fill_linear_gradient(0, 0, width, height, &gradient);

    for tick in tick_marks(min_value, max_value, width) {
        surface.draw_text(
            tick.x as i32 + LABEL_DX,
            height as i32 - LABEL_BOTTOM,
            &tick.label,
            Rgb::BLACK,
        );
    }

    surface
}

/// The cached raster and the key it was built for
#[derive(Debug, Clone)]
pub struct GradientCache {
    pub surface: RasterSurface,
    pub width: i32,
    pub height: i32,
    pub map_id: Option<Uuid>,
}

impl GradientCache {
    fn matches(&self, map_id: Option<Uuid>, width: i32, height: i32) -> bool {
        self.width == width && self.height == height && self.map_id == map_id
    }
}

/// Gradient strip renderer bound to one host widget
#[derive(Debug)]
pub struct GradientStrip<W: HostWidget> {
    widget: W,
    cache: Option<GradientCache>,
}

impl<W: HostWidget> GradientStrip<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            cache: None,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn cache(&self) -> Option<&GradientCache> {
        self.cache.as_ref()
    }

    /// The cached raster, if any
    pub fn surface(&self) -> Option<&RasterSurface> {
        self.cache.as_ref().map(|cache| &cache.surface)
    }

    /// Drop the cached raster; the next render rebuilds it
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Render `map` at `width x height`.
    ///
    /// A non-positive size leaves the cache untouched. A cache built for the
    /// same size and the same map instance is returned as-is. Anything else
    /// rebuilds the raster and queues a widget redraw.
    pub fn render(
        &mut self,
        map: Option<&ColorMap>,
        width: i32,
        height: i32,
    ) -> Option<&RasterSurface> {
        if width <= 0 || height <= 0 {
            debug!(width, height, "Skipping strip render for empty allocation");
            return self.surface();
        }

        let map_id = map.map(ColorMap::id);
        let hit = self
            .cache
            .as_ref()
            .is_some_and(|cache| cache.matches(map_id, width, height));
        if hit {
            debug!(width, height, "Strip cache hit");
            return self.surface();
        }

        let start = Instant::now();
        let surface = rasterize_strip(map, width as u32, height as u32);
        debug!(
            width,
            height,
            map = ?map_id,
            surface = %surface.id(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Strip rasterized"
        );

        self.cache = Some(GradientCache {
            surface,
            width,
            height,
            map_id,
        });
        self.widget.queue_draw();
        self.surface()
    }

    /// Render at the widget's current allocation
    pub fn refresh(&mut self, map: Option<&ColorMap>) -> Option<&RasterSurface> {
        let (width, height) = self.widget.allocated_size();
        self.render(map, width, height)
    }

    /// Draw callback: bring the cache up to date, then blit it. Before any
    /// raster can exist the target gets a white fill and a caption.
    pub fn draw(&mut self, map: Option<&ColorMap>, target: &mut dyn DrawSurface) {
        self.refresh(map);

        match self.surface() {
            Some(surface) => target.blit(surface, 0, 0),
            None => {
                target.paint(Rgb::WHITE);
                target.draw_text(10, 10, PLACEHOLDER_TEXT, Rgb::BLACK);
            }
        }
    }
}
