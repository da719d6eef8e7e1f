//! Interfaces the host engine implements.
//!
//! The painter never reaches into engine globals (active camera, raw input
//! devices, GPU handles). Everything it needs from the outside is passed in
//! per call through these traits.

use crate::surface::PaintSurface;
use crate::types::{PointerSample, Ray, SurfaceHit};

/// Supplies one pointer sample per frame.
pub trait InputSource {
    fn sample(&self) -> PointerSample;
}

/// Casts a world-space ray against the scene.
pub trait HitTester {
    /// Closest intersection along the ray, or `None` if it misses.
    fn cast(&self, ray: &Ray) -> Option<SurfaceHit>;
}

/// Receives finalized pixel data for display.
///
/// Called with the full buffer at most once per paint event; uploads are
/// batched per event, never per pixel.
pub trait DisplayTarget {
    fn present(&mut self, width: u32, height: u32, pixels: &[u8]);
}

impl PaintSurface {
    /// Upload the full buffer to a display target.
    pub fn publish<D: DisplayTarget>(&self, target: &mut D) {
        target.present(self.width, self.height, self.as_bytes());
    }
}

/// A [`DisplayTarget`] that retains the last presented frame in memory.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    width: u32,
    height: u32,
    data: Vec<u8>,
    presents: usize,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last presented frame as raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Dimensions of the last presented frame.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// How many times `present` has been called.
    pub fn present_count(&self) -> usize {
        self.presents
    }
}

impl DisplayTarget for MemoryTarget {
    fn present(&mut self, width: u32, height: u32, pixels: &[u8]) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.extend_from_slice(pixels);
        self.presents += 1;
    }
}
