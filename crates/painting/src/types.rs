use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color, laid out for direct texture upload.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Compare RGB channels only. Alpha does not participate in overwrite
    /// decisions during stamping.
    #[inline]
    pub const fn rgb_eq(self, other: Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// Identity of a paintable surface.
///
/// A painter only accepts hits whose target matches its own id; hits on
/// other scene objects are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

/// A world-space ray derived from the pointer position and active camera.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// One pointer sample per frame.
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    /// Whether the paint button/pen is currently held.
    pub active: bool,
    pub ray: Ray,
}

/// Result of a hit test against the scene.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// Intersection point in world space.
    pub point: Vec3,
    /// The surface that was hit.
    pub surface: SurfaceId,
}
