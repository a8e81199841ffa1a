//! In-memory RGBA drawing surface.

use image::{ImageBuffer, Rgba, RgbaImage};
use std::io::Cursor;
use std::ops::Range;
use std::path::Path;
use uuid::Uuid;

use super::font::{self, CHAR_W, GLYPH_COLS};
use super::gradient::LinearGradient;
use super::DrawSurface;
use crate::colormaps::Rgb;
use crate::error::Result;
use crate::logging::generate_id;

/// An RGBA raster with a handle identity.
///
/// Every surface gets a fresh id on allocation, so two handles with the
/// same id are the same allocation.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    id: Uuid,
    image: RgbaImage,
}

impl RasterSurface {
    /// Allocate a transparent `width x height` surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            id: generate_id(),
            image: ImageBuffer::new(width, height),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel at `(x, y)`, if inside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Encode the surface as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.image.write_to(&mut buffer, image::ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }

    /// Write the surface to a PNG file
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    fn put(&mut self, x: i32, y: i32, pixel: [u8; 4]) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Rgba(pixel));
        }
    }

    /// Clip a rectangle to the surface, returning pixel ranges
    fn clip(&self, x: i32, y: i32, width: u32, height: u32) -> (Range<u32>, Range<u32>) {
        let clamp_x = |v: i64| v.clamp(0, self.image.width() as i64) as u32;
        let clamp_y = |v: i64| v.clamp(0, self.image.height() as i64) as u32;
        let xs = clamp_x(x as i64)..clamp_x(x as i64 + width as i64);
        let ys = clamp_y(y as i64)..clamp_y(y as i64 + height as i64);
        (xs, ys)
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char, pixel: [u8; 4]) {
        let Some(rows) = font::glyph(ch) else {
            return;
        };
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (0x10 >> col) != 0 {
                    self.put(x + col as i32, y + row as i32, pixel);
                }
            }
        }
    }
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let pixel = color.to_rgba8();
        let (xs, ys) = self.clip(x, y, width, height);
        for py in ys {
            for px in xs.clone() {
                self.image.put_pixel(px, py, Rgba(pixel));
            }
        }
    }

    fn fill_linear_gradient(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        gradient: &LinearGradient,
    ) {
        let (xs, ys) = self.clip(x, y, width, height);
        for px in xs {
            let t = gradient.offset_at(px as f64 + 0.5);
            let Some(color) = gradient.color_at(t) else {
                continue;
            };
            let pixel = color.to_rgba8();
            for py in ys.clone() {
                self.image.put_pixel(px, py, Rgba(pixel));
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb) {
        let pixel = color.to_rgba8();
        for (i, ch) in text.chars().enumerate() {
            self.draw_char(x + (i as u32 * CHAR_W) as i32, y, ch, pixel);
        }
    }

    fn text_extent(&self, text: &str) -> (u32, u32) {
        font::text_extent(text)
    }

    fn blit(&mut self, source: &RasterSurface, x: i32, y: i32) {
        for (sx, sy, src) in source.image.enumerate_pixels() {
            let (dx, dy) = (x + sx as i32, y + sy as i32);
            if dx < 0 || dy < 0 || dx as u32 >= self.width() || dy as u32 >= self.height() {
                continue;
            }
            let dst = self.image.get_pixel(dx as u32, dy as u32).0;
            self.put(dx, dy, composite_over(src.0, dst));
        }
    }
}

/// Source-over compositing of straight-alpha pixels
fn composite_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    match src[3] {
        255 => src,
        0 => dst,
        alpha => {
            let a = alpha as f64 / 255.0;
            let dst_a = dst[3] as f64 / 255.0;
            let out_a = a + dst_a * (1.0 - a);
            let channel = |s: u8, d: u8| {
                let c = (s as f64 * a + d as f64 * dst_a * (1.0 - a)) / out_a;
                c.round().clamp(0.0, 255.0) as u8
            };
            [
                channel(src[0], dst[0]),
                channel(src[1], dst[1]),
                channel(src[2], dst[2]),
                (out_a * 255.0).round() as u8,
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = RasterSurface::new(4, 3);
        assert_eq!(surface.size(), (4, 3));
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_surface_ids_are_unique() {
        assert_ne!(RasterSurface::new(1, 1).id(), RasterSurface::new(1, 1).id());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut surface = RasterSurface::new(4, 4);
        surface.fill_rect(-2, 2, 4, 10, Rgb::RED);

        assert_eq!(surface.pixel(0, 2), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(1, 3), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(2, 2), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(0, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_gradient_fill_samples_pixel_centres() {
        let mut surface = RasterSurface::new(2, 1);
        let mut gradient = LinearGradient::horizontal(0.0, 2.0);
        gradient.add_color_stop(0.0, Rgb::BLACK);
        gradient.add_color_stop(1.0, Rgb::WHITE);
        surface.fill_linear_gradient(0, 0, 2, 1, &gradient);

        assert_eq!(surface.pixel(0, 0), Some([64, 64, 64, 255]));
        assert_eq!(surface.pixel(1, 0), Some([191, 191, 191, 255]));
    }

    #[test]
    fn test_draw_text_sets_glyph_pixels() {
        let mut surface = RasterSurface::new(12, 9);
        surface.paint(Rgb::WHITE);
        surface.draw_text(0, 0, "-1", Rgb::BLACK);

        // Middle bar of '-'.
        assert_eq!(surface.pixel(0, 3), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel(0, 0), Some([255, 255, 255, 255]));
        // Stem of '1' in the second cell.
        assert_eq!(surface.pixel(6 + 2, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_blit_copies_opaque_and_skips_transparent() {
        let mut source = RasterSurface::new(2, 1);
        source.fill_rect(0, 0, 1, 1, Rgb::BLUE);

        let mut target = RasterSurface::new(3, 1);
        target.paint(Rgb::WHITE);
        target.blit(&source, 1, 0);

        assert_eq!(target.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(1, 0), Some([0, 0, 255, 255]));
        assert_eq!(target.pixel(2, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_composite_half_alpha() {
        let out = composite_over([255, 0, 0, 128], [0, 0, 255, 255]);
        assert_eq!(out[3], 255);
        assert!(out[0] > 120 && out[0] < 135);
        assert!(out[2] > 120 && out[2] < 135);
    }

    #[test]
    fn test_encode_png() {
        let mut surface = RasterSurface::new(3, 2);
        surface.paint(Rgb::GREEN);
        let bytes = surface.encode_png().unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
    }
}
