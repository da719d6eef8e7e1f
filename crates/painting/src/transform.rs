//! World-space hit point to texel conversion.
//!
//! The painted surface is modeled as a quad of `quad_size` world units
//! centered at `origin` before `scale` is applied. A hit point on the
//! surface therefore lies within `±(scale * quad_size) / 2` of the origin
//! on each axis, and normalizing the offset by `scale * quad_size` yields
//! a value in roughly [-0.5, 0.5] across the surface.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::validation::ConfigError;

/// Placement of the painted surface in the world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfacePlacement {
    /// World-space center of the painted quad.
    pub origin: Vec3,
    /// Non-uniform scale applied to the quad.
    pub scale: Vec2,
    /// World extent of the unscaled quad.
    pub quad_size: Vec2,
}

impl Default for SurfacePlacement {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            scale: Vec2::ONE,
            quad_size: Vec2::ONE,
        }
    }
}

impl SurfacePlacement {
    /// Check scale and quad extent before painting starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale.x == 0.0 || self.scale.y == 0.0 {
            return Err(ConfigError::InvalidScale { scale: self.scale });
        }
        if !self.quad_size.is_finite() || self.quad_size.x <= 0.0 || self.quad_size.y <= 0.0 {
            return Err(ConfigError::InvalidQuadSize {
                quad_size: self.quad_size,
            });
        }
        Ok(())
    }

    /// World-space offset of a hit point from the quad center, on the
    /// quad's own axes.
    #[inline]
    pub fn offset_of(&self, point: Vec3) -> Vec2 {
        (point - self.origin).truncate()
    }

    /// Convert a world-space offset from the quad center into the texel
    /// the brush centers on.
    ///
    /// The offset is normalized by `scale * quad_size`, mapped to pixel
    /// units, truncated toward zero, and recentered on the buffer. The
    /// result may lie outside the surface; the rasterizer skips pixels
    /// that fall out of range.
    pub fn texel_at(&self, offset: Vec2, width: u32, height: u32) -> (i32, i32) {
        let normalized = offset / (self.scale * self.quad_size);
        let x = (normalized.x * width as f32) as i32 + (width / 2) as i32;
        let y = (normalized.y * height as f32) as i32 + (height / 2) as i32;
        (x, y)
    }
}
