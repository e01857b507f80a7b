//! Rendering boundary
//!
//! The simulation never draws. Hosts implement `Renderer` (canvas 2D on the
//! web) or use `QuadBatch` to get triangle vertices for a GPU backend.

pub mod batch;
pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::DVec2;

use crate::sim::Entity;

pub use batch::{QuadBatch, TextOverlay};
pub use scene::draw_session;
pub use vertex::{Vertex, colors};

/// Linear RGBA color
pub type Color = [f32; 4];

/// Drawing primitives a host provides
pub trait Renderer {
    /// Wipe the whole field
    fn clear(&mut self, width: f64, height: f64);

    /// Fill the rectangle covered by `rect`
    fn fill_rect(&mut self, rect: &Entity, color: Color);

    /// Draw a headline with a smaller instruction line below it, centered on `center`
    fn draw_text(&mut self, message: &str, instruction: &str, center: DVec2);
}
