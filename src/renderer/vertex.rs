//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use super::Color;
    use crate::sim::ObstacleKind;

    pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER: Color = [0.0, 0.0, 0.0, 1.0];
    pub const OBSTACLE_GROUND: Color = [1.0, 0.0, 0.0, 1.0];
    pub const OBSTACLE_FLYING: Color = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [0.0, 0.0, 0.0, 1.0];

    pub fn obstacle(kind: ObstacleKind) -> Color {
        match kind {
            ObstacleKind::Ground => OBSTACLE_GROUND,
            ObstacleKind::Flying => OBSTACLE_FLYING,
        }
    }

    /// CSS `rgba()` string for canvas fill styles
    pub fn to_css(color: Color) -> String {
        let [r, g, b, a] = color;
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }
}
