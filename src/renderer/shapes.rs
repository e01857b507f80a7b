//! Shape generation for 2D primitives

use super::Color;
use super::vertex::Vertex;
use crate::sim::Entity;

/// Generate two triangles covering an axis-aligned rectangle
pub fn rect(entity: &Entity, color: Color) -> [Vertex; 6] {
    let left = entity.left() as f32;
    let right = entity.right() as f32;
    let top = entity.top() as f32;
    let bottom = entity.bottom() as f32;

    [
        Vertex::new(left, top, color),
        Vertex::new(right, top, color),
        Vertex::new(left, bottom, color),
        Vertex::new(left, bottom, color),
        Vertex::new(right, top, color),
        Vertex::new(right, bottom, color),
    ]
}

/// Map field coordinates (+y down, origin top-left) to clip space
pub fn to_clip_space(vertices: &mut [Vertex], field_width: f32, field_height: f32) {
    for v in vertices {
        let [x, y] = v.position;
        v.position = [x / field_width * 2.0 - 1.0, 1.0 - y / field_height * 2.0];
    }
}
