//! CPU surface for painting - RGBA8 storage with bounds-checked access

use crate::types::Rgba8;
use crate::validation::{ConfigError, validate_dimensions};

/// An RGBA8 CPU surface for painting.
///
/// Pixels are stored in row-major order with index `y * width + x`;
/// index 0 is the top-left corner and the same convention holds for
/// stamping and publishing. All access is bounds-checked: out-of-range
/// reads return `None` and out-of-range writes are dropped.
pub struct PaintSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order
    pixels: Vec<Rgba8>,
}

impl PaintSurface {
    /// Allocate a surface with the given dimensions.
    ///
    /// Dimensions are validated before anything is allocated. The initial
    /// contents are transparent black; callers should [`clear`](Self::clear)
    /// before painting.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        validate_dimensions(width, height)?;
        let pixel_count = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            pixels: vec![Rgba8::TRANSPARENT; pixel_count],
        })
    }

    /// Overwrite every pixel with a solid color.
    pub fn clear(&mut self, color: Rgba8) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates.
    /// Returns None if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates.
    /// Does nothing if coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Get raw pixel data for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data (for advanced operations).
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Get mutable access to pixel data (for advanced operations).
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }
}
