//! Axis-aligned rectangles shared by the player and obstacles

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{Color, Renderer};

/// An axis-aligned rectangle in field coordinates (+y is down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub pos: DVec2,
    /// Width and height, both positive
    pub size: DVec2,
}

impl Entity {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "entity size must be positive");
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Render hook: draw as a filled rectangle
    pub fn draw(&self, renderer: &mut impl Renderer, color: Color) {
        renderer.fill_rect(self, color);
    }
}
