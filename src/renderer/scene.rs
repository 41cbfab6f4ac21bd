//! Scene drawing through the coordinate mapper

use glam::Vec2;

use crate::mapper::{CoordinateMapper, SurfaceSize};
use crate::sim::BodyStore;

/// Linear RGBA color, components in [0, 1]
pub type Rgba = [f32; 4];

/// Light grey page behind the arena (#f0f0f0)
pub const BACKGROUND: Rgba = [240.0 / 255.0, 240.0 / 255.0, 240.0 / 255.0, 1.0];

/// Fill, outline and stroke width of a drawn disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskStyle {
    pub fill: Rgba,
    pub outline: Rgba,
    /// Outline width in surface pixels
    pub line_width: f32,
}

impl Default for DiskStyle {
    /// White disk with a 2px black outline
    fn default() -> Self {
        Self {
            fill: [1.0, 1.0, 1.0, 1.0],
            outline: [0.0, 0.0, 0.0, 1.0],
            line_width: 2.0,
        }
    }
}

/// A drawing surface, in surface pixel coordinates
pub trait Canvas: SurfaceSize {
    /// Clear the whole surface to `color`
    fn fill_background(&mut self, color: Rgba);

    /// Draw a filled, outlined disk
    fn draw_disk(&mut self, center: Vec2, radius: f32, style: &DiskStyle);
}

/// Clear the canvas and draw every body, oldest first (newest on top)
pub fn draw_scene<C: Canvas>(canvas: &mut C, mapper: &CoordinateMapper, bodies: &BodyStore) {
    canvas.fill_background(BACKGROUND);
    let style = DiskStyle::default();
    for body in bodies {
        let center = mapper.to_surface(&*canvas, body.pos);
        let radius = mapper.to_surface_radius(&*canvas, body.radius());
        canvas.draw_disk(center, radius, &style);
    }
}
