//! Dual-radius stamp brush.
//!
//! A stamp writes two concentric discs in one pass: a solid inner core and
//! an outer halo ring. The halo never overwrites pixels that already carry
//! the inner color, so overlapping strokes keep their cores intact.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::MAX_BRUSH_RADIUS;
use crate::surface::PaintSurface;
use crate::types::Rgba8;
use crate::validation::{ConfigError, validate_radius};

/// Per-stamp brush parameters.
///
/// Radii are raw pixel inputs. The stamp geometry derives from them with
/// integer division: the loop bound is `(inner_radius + outer_radius) / 2`
/// and the solid core radius is `inner_radius / 2`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BrushSettings {
    pub inner_radius: u32,
    pub outer_radius: u32,
    pub inner_color: Rgba8,
    pub outer_color: Rgba8,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            inner_radius: 10,
            outer_radius: 10,
            inner_color: Rgba8::RED,
            outer_color: Rgba8::BLACK,
        }
    }
}

impl BrushSettings {
    /// Check both radius inputs against the configured cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_radius(self.inner_radius)?;
        validate_radius(self.outer_radius)?;
        Ok(())
    }

    /// Half the combined radius; bound of the stamp window.
    ///
    /// Radii above the cap are treated as the cap so the arithmetic can
    /// never overflow, even on settings that skipped validation.
    #[inline]
    pub fn half_total(&self) -> i32 {
        let total = self.inner_radius.min(MAX_BRUSH_RADIUS) + self.outer_radius.min(MAX_BRUSH_RADIUS);
        (total / 2) as i32
    }

    /// Radius of the solid core.
    #[inline]
    pub fn half_inner(&self) -> i32 {
        (self.inner_radius.min(MAX_BRUSH_RADIUS) / 2) as i32
    }
}

impl PaintSurface {
    /// Stamp the brush centered on `(center_x, center_y)`.
    ///
    /// Walks the square window `[-half_total, half_total)` on both axes and
    /// tests each pixel against the two concentric circles by squared
    /// distance, strict less-than, no square root. Inside the inner circle
    /// the pixel takes the inner color; inside the outer circle it takes
    /// the outer color unless it already matches the inner color. Pixels
    /// outside the surface are skipped per axis, so stamping over an edge
    /// neither wraps to another row nor touches anything out of range.
    ///
    /// Returns the affected region `(x, y, width, height)` clamped to the
    /// surface, or `None` when the window misses the surface entirely or
    /// the combined radius rounds down to zero.
    pub fn stamp(
        &mut self,
        center_x: i32,
        center_y: i32,
        brush: &BrushSettings,
    ) -> Option<(u32, u32, u32, u32)> {
        let half_total = brush.half_total();
        let half_inner = brush.half_inner();

        debug!(
            "PaintSurface::stamp: center=({}, {}), half_inner={}, half_total={}",
            center_x, center_y, half_inner, half_total
        );

        if half_total == 0 {
            return None;
        }

        let inner_sq = half_inner * half_inner;
        let total_sq = half_total * half_total;
        let width = self.width as i32;
        let height = self.height as i32;

        // Window intersection with the surface, for the affected region
        let x_min = (center_x - half_total).max(0);
        let y_min = (center_y - half_total).max(0);
        let x_max = (center_x + half_total).min(width);
        let y_max = (center_y + half_total).min(height);
        if x_min >= x_max || y_min >= y_max {
            debug!("  -> skipped: stamp window entirely off the surface");
            return None;
        }

        for i in -half_total..half_total {
            let y = center_y + i;
            if y < 0 || y >= height {
                continue;
            }
            for j in -half_total..half_total {
                let x = center_x + j;
                if x < 0 || x >= width {
                    continue;
                }
                let dist_sq = j * j + i * i;
                if dist_sq < inner_sq {
                    self.set_pixel(x as u32, y as u32, brush.inner_color);
                } else if dist_sq < total_sq {
                    // The halo must not recolor pixels the core already owns
                    if let Some(current) = self.get_pixel(x as u32, y as u32) {
                        if !current.rgb_eq(brush.inner_color) {
                            self.set_pixel(x as u32, y as u32, brush.outer_color);
                        }
                    }
                }
            }
        }

        Some((
            x_min as u32,
            y_min as u32,
            (x_max - x_min) as u32,
            (y_max - y_min) as u32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_surface(width: u32, height: u32) -> PaintSurface {
        let mut surface = PaintSurface::new(width, height).unwrap();
        surface.clear(Rgba8::WHITE);
        surface
    }

    fn brush(inner_radius: u32, outer_radius: u32) -> BrushSettings {
        BrushSettings {
            inner_radius,
            outer_radius,
            ..Default::default()
        }
    }

    #[test]
    fn test_derived_radii() {
        let b = brush(10, 10);
        assert_eq!(b.half_total(), 10);
        assert_eq!(b.half_inner(), 5);

        // Integer division rounds both halves down
        let b = brush(5, 2);
        assert_eq!(b.half_total(), 3);
        assert_eq!(b.half_inner(), 2);
    }

    #[test]
    fn test_zero_radii_is_noop() {
        let mut surface = white_surface(8, 8);
        assert_eq!(surface.stamp(4, 4, &brush(0, 0)), None);
        for p in surface.pixels() {
            assert_eq!(*p, Rgba8::WHITE);
        }
    }

    #[test]
    fn test_dual_radius_pattern_4x4() {
        // inner=2, outer=2 -> half_inner=1, half_total=2. Only the center
        // pixel is within squared distance < 1; the eight surrounding
        // pixels at squared distance 1 and 2 form the halo.
        let mut surface = white_surface(4, 4);
        let region = surface.stamp(2, 2, &brush(2, 2));
        assert_eq!(region, Some((0, 0, 4, 4)));

        for y in 0..4u32 {
            for x in 0..4u32 {
                let dx = x as i32 - 2;
                let dy = y as i32 - 2;
                let dist_sq = dx * dx + dy * dy;
                let expected = if dist_sq < 1 {
                    Rgba8::RED
                } else if dist_sq < 4 {
                    Rgba8::BLACK
                } else {
                    Rgba8::WHITE
                };
                assert_eq!(
                    surface.get_pixel(x, y),
                    Some(expected),
                    "pixel ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_inner_stamp_is_idempotent() {
        let mut once = white_surface(16, 16);
        once.stamp(8, 8, &brush(6, 0));

        let mut twice = white_surface(16, 16);
        twice.stamp(8, 8, &brush(6, 0));
        twice.stamp(8, 8, &brush(6, 0));

        assert_eq!(once.pixels(), twice.pixels());
    }

    #[test]
    fn test_halo_never_overwrites_inner_paint() {
        let mut surface = white_surface(16, 16);
        let b = brush(4, 4);
        surface.stamp(8, 8, &b);
        assert_eq!(surface.get_pixel(8, 8), Some(Rgba8::RED));

        // Stamp again on the same spot: every core pixel must stay inner
        surface.stamp(8, 8, &b);
        assert_eq!(surface.get_pixel(8, 8), Some(Rgba8::RED));
    }

    #[test]
    fn test_overlapping_halo_preserves_adjacent_core() {
        // Two stamps at adjacent anchors sharing an inner color but with
        // different halo colors: the second halo sweeps across the first
        // core and must leave it intact.
        let mut surface = white_surface(16, 16);
        let first = BrushSettings {
            inner_radius: 4,
            outer_radius: 2,
            inner_color: Rgba8::RED,
            outer_color: Rgba8::BLACK,
        };
        surface.stamp(6, 8, &first);
        // Core of the first stamp: squared distance < 4 from (6, 8)
        assert_eq!(surface.get_pixel(6, 8), Some(Rgba8::RED));
        assert_eq!(surface.get_pixel(7, 8), Some(Rgba8::RED));

        let second = BrushSettings {
            inner_radius: 2,
            outer_radius: 6,
            inner_color: Rgba8::RED,
            outer_color: Rgba8::rgb(32, 32, 32),
        };
        surface.stamp(9, 8, &second);

        // (7, 8) is at squared distance 4 from (9, 8): inside the second
        // halo (total_sq = 16) but already inner-painted, so untouched.
        assert_eq!(surface.get_pixel(7, 8), Some(Rgba8::RED));
        assert_eq!(surface.get_pixel(6, 8), Some(Rgba8::RED));
        // A plain white halo pixel does get the second outer color
        assert_eq!(surface.get_pixel(12, 8), Some(Rgba8::rgb(32, 32, 32)));
    }

    #[test]
    fn test_halo_protection_is_keyed_to_the_stamping_brush() {
        // The overwrite guard compares against the color the current stamp
        // paints its core with, not against every color ever stamped.
        let mut surface = white_surface(16, 16);
        let blue = Rgba8::rgb(0, 0, 255);
        surface.stamp(6, 8, &BrushSettings {
            inner_radius: 4,
            outer_radius: 2,
            inner_color: blue,
            outer_color: Rgba8::BLACK,
        });

        let second = BrushSettings {
            inner_radius: 2,
            outer_radius: 6,
            inner_color: Rgba8::RED,
            outer_color: Rgba8::rgb(32, 32, 32),
        };
        surface.stamp(9, 8, &second);

        // The blue core is foreign paint to the second brush and its halo
        // recolors it; the second brush's own core stays red.
        assert_eq!(surface.get_pixel(9, 8), Some(Rgba8::RED));
        assert_eq!(surface.get_pixel(6, 8), Some(Rgba8::rgb(32, 32, 32)));
    }

    #[test]
    fn test_stamp_at_corner_stays_in_bounds() {
        // Anchor at the corner with a window reaching well past every edge
        let mut surface = white_surface(10, 10);
        let region = surface.stamp(0, 0, &brush(5, 5));
        assert_eq!(region, Some((0, 0, 5, 5)));

        // Nothing outside the clamped window may change
        for y in 0..10u32 {
            for x in 0..10u32 {
                if x >= 5 || y >= 5 {
                    assert_eq!(surface.get_pixel(x, y), Some(Rgba8::WHITE));
                }
            }
        }
        assert_eq!(surface.get_pixel(0, 0), Some(Rgba8::RED));
    }

    #[test]
    fn test_stamp_off_surface_is_noop() {
        let mut surface = white_surface(10, 10);
        assert_eq!(surface.stamp(-20, -20, &brush(4, 4)), None);
        assert_eq!(surface.stamp(30, 5, &brush(4, 4)), None);
        for p in surface.pixels() {
            assert_eq!(*p, Rgba8::WHITE);
        }
    }

    #[test]
    fn test_stamp_near_edge_clips_region() {
        let mut surface = white_surface(10, 10);
        let region = surface.stamp(9, 5, &brush(4, 4));
        // half_total = 4: window x in [5, 13) clamps to [5, 10)
        assert_eq!(region, Some((5, 1, 5, 8)));
    }
}
