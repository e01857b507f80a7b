//! CPU-side vertex batching
//!
//! Collects one frame's rectangles as triangles and keeps text separately,
//! since glyph rendering belongs to the host.

use glam::DVec2;

use super::vertex::Vertex;
use super::{Color, Renderer, shapes};
use crate::sim::Entity;

/// Centered text queued for the host to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub message: String,
    pub instruction: String,
    pub center: DVec2,
}

/// A frame's worth of geometry
#[derive(Debug, Default)]
pub struct QuadBatch {
    pub vertices: Vec<Vertex>,
    pub text: Option<TextOverlay>,
    /// Field size from the last `clear`
    pub field: DVec2,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rectangles drawn since the last clear
    pub fn rect_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Vertex data ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Copy of the vertices mapped into clip space for the last cleared field
    pub fn clip_space_vertices(&self) -> Vec<Vertex> {
        let mut vertices = self.vertices.clone();
        shapes::to_clip_space(&mut vertices, self.field.x as f32, self.field.y as f32);
        vertices
    }
}

impl Renderer for QuadBatch {
    fn clear(&mut self, width: f64, height: f64) {
        self.vertices.clear();
        self.text = None;
        self.field = DVec2::new(width, height);
    }

    fn fill_rect(&mut self, rect: &Entity, color: Color) {
        self.vertices.extend_from_slice(&shapes::rect(rect, color));
    }

    fn draw_text(&mut self, message: &str, instruction: &str, center: DVec2) {
        self.text = Some(TextOverlay {
            message: message.to_string(),
            instruction: instruction.to_string(),
            center,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_frame() {
        let mut batch = QuadBatch::new();
        batch.clear(1000.0, 600.0);
        batch.fill_rect(&Entity::new(0.0, 0.0, 10.0, 10.0), [1.0; 4]);
        batch.draw_text("a", "b", DVec2::ZERO);
        assert_eq!(batch.rect_count(), 1);
        assert_eq!(batch.as_bytes().len(), 6 * Vertex::STRIDE);
        assert_eq!(batch.clip_space_vertices()[0].position, [-1.0, 1.0]);

        batch.clear(1000.0, 600.0);
        assert_eq!(batch.rect_count(), 0);
        assert!(batch.text.is_none());
        assert_eq!(batch.field, DVec2::new(1000.0, 600.0));
    }
}
