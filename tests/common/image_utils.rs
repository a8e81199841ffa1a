//! Image inspection utilities for testing.
//!
//! Helpers for checking rendered strips, either in memory or after a PNG
//! round trip through disk.

#![allow(dead_code)]

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};
use std::path::Path;

/// Load an image from a file
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path)
}

/// Load an image from a byte array
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes)
}

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Check if an image has the expected dimensions
pub fn assert_image_dimensions(
    image: &DynamicImage,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), String> {
    let (actual_width, actual_height) = image.dimensions();

    if actual_width != expected_width || actual_height != expected_height {
        return Err(format!(
            "Image dimensions differ: actual = {}x{}, expected = {}x{}",
            actual_width, actual_height, expected_width, expected_height
        ));
    }

    Ok(())
}

/// Check that every pixel of column `x` in rows `rows` has the same color
pub fn assert_column_uniform(
    image: &DynamicImage,
    x: u32,
    rows: std::ops::Range<u32>,
) -> Result<[u8; 4], String> {
    let mut expected: Option<[u8; 4]> = None;
    for y in rows {
        let pixel = image.get_pixel(x, y).0;
        match expected {
            None => expected = Some(pixel),
            Some(e) if e != pixel => {
                return Err(format!(
                    "Column {} is not uniform: {:?} at row {} differs from {:?}",
                    x, pixel, y, e
                ));
            }
            Some(_) => {}
        }
    }
    expected.ok_or_else(|| "Empty row range".to_string())
}

/// Count pixels matching `color` exactly
pub fn count_pixels(image: &DynamicImage, color: [u8; 4]) -> usize {
    image.pixels().filter(|(_, _, p)| p.0 == color).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_detect_image_format() {
        let img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(2, 2);
        let mut png_bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .unwrap();

        assert_eq!(detect_image_format(&png_bytes), Some(ImageFormat::Png));
    }

    #[test]
    fn test_assert_column_uniform() {
        let mut img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(2, 3);
        for (x, _y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8, 0, 0, 255]);
        }
        img.put_pixel(1, 2, Rgba([9, 9, 9, 255]));
        let img = DynamicImage::ImageRgba8(img);

        assert_eq!(assert_column_uniform(&img, 0, 0..3), Ok([0, 0, 0, 255]));
        assert!(assert_column_uniform(&img, 1, 0..3).is_err());
        assert_eq!(count_pixels(&img, [9, 9, 9, 255]), 1);
    }
}
