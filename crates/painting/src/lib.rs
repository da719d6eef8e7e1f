//! Impasto painting core - ray-driven texture painting
//!
//! This crate implements the CPU side of painting on a textured 3D surface:
//! - [`surface::PaintSurface`] - RGBA8 pixel grid with bounds-checked access
//! - [`brush`] - Dual-radius stamp brush applied to the surface
//! - [`transform`] - World-space hit point to texel conversion
//! - [`engine`] - Traits implemented by the host engine (input, hit testing, display)
//! - [`painter`] - Per-frame pipeline tying the above together
//! - [`validation`] - Configuration checks and errors
//!
//! The host engine polls input, builds camera rays, and owns the GPU
//! texture; this crate only mutates the pixel buffer and hands it back.

pub mod brush;
pub mod constants;
pub mod engine;
pub mod painter;
pub mod surface;
pub mod transform;
pub mod types;
pub mod validation;

pub use brush::*;
pub use constants::*;
pub use engine::*;
pub use painter::*;
pub use surface::*;
pub use transform::*;
pub use types::*;
pub use validation::*;
