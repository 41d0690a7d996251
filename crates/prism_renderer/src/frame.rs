//! Frame buffer holding unclamped render output, and its 8-bit conversion.

use std::path::Path;

use crate::RenderResult;
use image::{Rgb, RgbImage};
use log::info;
use prism_core::Color;

/// Row-major buffer of unclamped colors.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Pixels of row `y`, left to right.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Nested `[height][width][3]` view of the raw values.
    pub fn to_nested(&self) -> Vec<Vec<[f64; 3]>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.to_array()).collect())
            .collect()
    }

    /// Quantize to an 8-bit RGB image.
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| Rgb(color_to_rgb(self.get(x, y))))
    }

    /// Write the image; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgb8().save(path)?;
        info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Map one channel to 0-255: values at or above 1 saturate, values at or below 0 are black.
#[inline]
pub fn quantize_channel(value: f64) -> u8 {
    if value >= 1.0 {
        255
    } else if value > 0.0 {
        (value * 255.0) as u8
    } else {
        0
    }
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        quantize_channel(color.x),
        quantize_channel(color.y),
        quantize_channel(color.z),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_channel() {
        assert_eq!(quantize_channel(-0.5), 0);
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(0.5), 127);
        assert_eq!(quantize_channel(1.0), 255);
        assert_eq!(quantize_channel(7.5), 255);
        assert_eq!(quantize_channel(f64::NAN), 0);
    }

    #[test]
    fn test_frame_indexing() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.pixels[5] = Color::new(1.0, 2.0, 3.0);

        assert_eq!(frame.get(2, 1), Color::new(1.0, 2.0, 3.0));
        assert_eq!(frame.row(1)[2], Color::new(1.0, 2.0, 3.0));
        assert_eq!(frame.row(0), &[Color::ZERO; 3]);
        assert_eq!(frame.rows().count(), 2);

        let nested = frame.to_nested();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[1].len(), 3);
        assert_eq!(nested[1][2], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_to_rgb8() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.pixels[0] = Color::new(1.5, 0.5, -1.0);

        let image = frame.to_rgb8();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 127, 0]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([0, 0, 0]));
    }
}
