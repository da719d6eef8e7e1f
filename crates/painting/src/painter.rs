//! Per-frame painting pipeline.
//!
//! One painter owns one surface for its whole lifetime. Each frame it
//! samples the pointer, casts the ray, gates the hit to its own surface,
//! converts the hit point to a texel, stamps the brush, and publishes the
//! buffer once. Everything runs synchronously on the caller's thread; a
//! paint event completes before the next input sample is read.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::brush::BrushSettings;
use crate::constants::DEFAULT_TEXTURE_SIZE;
use crate::engine::{DisplayTarget, HitTester, InputSource};
use crate::surface::PaintSurface;
use crate::transform::SurfacePlacement;
use crate::types::{Rgba8, SurfaceId};
use crate::validation::ConfigError;

/// Everything needed to construct a [`Painter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PainterConfig {
    pub width: u32,
    pub height: u32,
    /// Identity of the surface this painter owns; hits on anything else
    /// are ignored.
    pub surface: SurfaceId,
    pub placement: SurfacePlacement,
    pub brush: BrushSettings,
    /// Color the surface is cleared to at session start.
    pub fill: Rgba8,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_TEXTURE_SIZE,
            height: DEFAULT_TEXTURE_SIZE,
            surface: SurfaceId(0),
            placement: SurfacePlacement::default(),
            brush: BrushSettings::default(),
            fill: Rgba8::WHITE,
        }
    }
}

/// Paints one surface in response to pointer rays.
pub struct Painter {
    surface: PaintSurface,
    placement: SurfacePlacement,
    brush: BrushSettings,
    id: SurfaceId,
    fill: Rgba8,
}

impl Painter {
    /// Validate the configuration and allocate the surface.
    ///
    /// The surface is allocated exactly once and lives as long as the
    /// painter; there is no resize.
    pub fn new(config: PainterConfig) -> Result<Self, ConfigError> {
        config.brush.validate()?;
        config.placement.validate()?;
        let surface = PaintSurface::new(config.width, config.height)?;
        Ok(Self {
            surface,
            placement: config.placement,
            brush: config.brush,
            id: config.surface,
            fill: config.fill,
        })
    }

    pub fn width(&self) -> u32 {
        self.surface.width
    }

    pub fn height(&self) -> u32 {
        self.surface.height
    }

    pub fn surface(&self) -> &PaintSurface {
        &self.surface
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    /// Replace the brush settings (validated against the radius cap).
    pub fn set_brush(&mut self, brush: BrushSettings) -> Result<(), ConfigError> {
        brush.validate()?;
        self.brush = brush;
        Ok(())
    }

    /// Change the color used by [`begin_session`](Self::begin_session).
    ///
    /// Every `Rgba8` value is a valid fill, so unlike [`set_brush`](Self::set_brush)
    /// there is nothing to validate here.
    pub fn set_fill(&mut self, fill: Rgba8) {
        self.fill = fill;
    }

    /// Clear the whole surface to the configured fill color and publish
    /// once, so every pixel holds a defined color before the first stamp.
    pub fn begin_session<D: DisplayTarget>(&mut self, display: &mut D) {
        self.clear(self.fill, display);
    }

    /// Wipe the surface to an arbitrary color and publish once.
    ///
    /// The given fill is transient: the configured fill color used by
    /// [`begin_session`](Self::begin_session) is left untouched.
    pub fn clear<D: DisplayTarget>(&mut self, fill: Rgba8, display: &mut D) {
        self.surface.clear(fill);
        self.surface.publish(display);
    }

    /// Upload the current buffer to the display target.
    pub fn publish<D: DisplayTarget>(&self, display: &mut D) {
        self.surface.publish(display);
    }

    /// Stamp the brush at a world-space hit point on the surface.
    ///
    /// Returns the affected region, or `None` if the stamp landed entirely
    /// off the surface. Does not publish; [`frame`](Self::frame) batches
    /// the upload per paint event.
    pub fn paint_at(&mut self, point: Vec3) -> Option<(u32, u32, u32, u32)> {
        let offset = self.placement.offset_of(point);
        let (center_x, center_y) =
            self.placement
                .texel_at(offset, self.surface.width, self.surface.height);
        self.surface.stamp(center_x, center_y, &self.brush)
    }

    /// Run one paint event.
    ///
    /// Samples the pointer, casts its ray, and paints if the closest hit is
    /// this painter's surface. The buffer is published at most once, and
    /// only when pixels actually changed. Returns whether paint was applied.
    pub fn frame<I, H, D>(&mut self, input: &I, hits: &H, display: &mut D) -> bool
    where
        I: InputSource,
        H: HitTester,
        D: DisplayTarget,
    {
        let sample = input.sample();
        if !sample.active {
            return false;
        }

        let Some(hit) = hits.cast(&sample.ray) else {
            trace!("Painter::frame: ray missed the scene");
            return false;
        };
        if hit.surface != self.id {
            trace!("Painter::frame: hit foreign surface {:?}", hit.surface);
            return false;
        }

        match self.paint_at(hit.point) {
            Some(region) => {
                debug!(
                    "Painter::frame: painted region ({}, {}) {}x{}",
                    region.0, region.1, region.2, region.3
                );
                self.surface.publish(display);
                true
            }
            None => false,
        }
    }
}
