//! Rendering module
//!
//! The simulation never draws. A frontend implements [`Canvas`] and calls
//! [`draw_scene`] once per frame after the physics steps have run.

pub mod scene;
pub mod text;

pub use scene::{BACKGROUND, Canvas, DiskStyle, Rgba, draw_scene};
pub use text::TextCanvas;
