//! Configuration checks shared by the painter and its parts.

use glam::Vec2;
use thiserror::Error;

use crate::constants::{MAX_BRUSH_RADIUS, MAX_TEXTURE_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid texture dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("texture dimensions {width}x{height} exceed maximum edge {}", MAX_TEXTURE_SIZE)]
    TextureTooLarge { width: u32, height: u32 },
    #[error("brush radius {radius} exceeds maximum {}", MAX_BRUSH_RADIUS)]
    RadiusTooLarge { radius: u32 },
    #[error("placement scale {scale:?} must be finite and non-zero on both axes")]
    InvalidScale { scale: Vec2 },
    #[error("quad size {quad_size:?} must be finite and positive on both axes")]
    InvalidQuadSize { quad_size: Vec2 },
}

/// Check texture dimensions before allocating a surface.
///
/// Rejection happens before any allocation, so a bad configuration never
/// leaves a partially initialized buffer behind.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    if width > MAX_TEXTURE_SIZE || height > MAX_TEXTURE_SIZE {
        return Err(ConfigError::TextureTooLarge { width, height });
    }
    Ok(())
}

/// Check a brush radius input against the configured cap.
pub fn validate_radius(radius: u32) -> Result<(), ConfigError> {
    if radius > MAX_BRUSH_RADIUS {
        return Err(ConfigError::RadiusTooLarge { radius });
    }
    Ok(())
}
