// src/vision_lib/vertex.rs

use bytemuck::{Pod, Zeroable};

use crate::geometry::Point;
use crate::scene_lib::polygon::ObstaclePolygon;

/// Single-precision vertex, laid out for direct upload to a vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FanVertex {
    pub position: [f32; 2],
}

impl FanVertex {
    pub fn new(position: [f32; 2]) -> Self {
        Self { position }
    }

    /// Line-loop vertices for drawing an obstacle outline.
    pub fn outline(polygon: &ObstaclePolygon) -> Vec<FanVertex> {
        polygon.vertices().iter().copied().map(FanVertex::from).collect()
    }

    pub fn as_bytes(vertices: &[FanVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

impl From<Point> for FanVertex {
    fn from(p: Point) -> Self {
        Self::new([p.x as f32, p.y as f32])
    }
}
