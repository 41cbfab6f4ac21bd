//! Logical <-> surface coordinate mapping
//!
//! Logical space is centered on the origin, spans [-R, R] on both axes and
//! has y pointing up. Surface space starts at the top-left corner with y
//! pointing down. The mapper reads the surface size on every call, so a
//! resize takes effect immediately.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HALF_EXTENT, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Anything with a current pixel size
pub trait SurfaceSize {
    /// (width, height) in pixels
    fn surface_size(&self) -> Vec2;
}

/// Affine transform between logical and surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    pub half_extent: f32,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self {
            half_extent: ARENA_HALF_EXTENT,
        }
    }
}

impl CoordinateMapper {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    #[inline]
    fn span(&self) -> f32 {
        2.0 * self.half_extent
    }

    /// Logical point -> surface pixel
    pub fn to_surface(&self, surface: &impl SurfaceSize, logical: Vec2) -> Vec2 {
        let size = surface.surface_size();
        let r = self.half_extent;
        Vec2::new(
            (logical.x + r) / self.span() * size.x,
            (r - logical.y) / self.span() * size.y,
        )
    }

    /// Logical radius -> surface radius, scaled by the smaller surface side
    pub fn to_surface_radius(&self, surface: &impl SurfaceSize, radius: f32) -> f32 {
        let size = surface.surface_size();
        radius / self.span() * size.min_element()
    }

    /// Surface pixel -> logical point (inverse of [`Self::to_surface`])
    pub fn from_surface(&self, surface: &impl SurfaceSize, px: Vec2) -> Vec2 {
        let size = surface.surface_size();
        let r = self.half_extent;
        Vec2::new(
            px.x / size.x * self.span() - r,
            r - px.y / size.y * self.span(),
        )
    }
}

/// A resizable drawing viewport that keeps a fixed aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Shrink-to-fit the available area while keeping the current aspect ratio
    pub fn fit_to(&mut self, available_width: f32, available_height: f32) {
        let aspect = self.aspect();
        if available_width / available_height > aspect {
            self.height = available_height;
            self.width = available_height * aspect;
        } else {
            self.width = available_width;
            self.height = available_width / aspect;
        }
        log::debug!("Viewport resized to {:.0}x{:.0}", self.width, self.height);
    }
}

impl SurfaceSize for Viewport {
    fn surface_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
