// src/scene_lib/polygon.rs

use crate::error::{Result, VisionError};
use crate::geometry::{Point, Segment};

/// A closed, opaque vertex loop. The edge from the last vertex back to the
/// first is implicit. Self-intersecting loops are accepted as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct ObstaclePolygon {
    vertices: Vec<Point>,
    segments: Vec<Segment>,
}

impl ObstaclePolygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(VisionError::TooFewVertices { count: vertices.len() });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(VisionError::NonFiniteVertex { index });
        }

        let count = vertices.len();
        let segments = (0..count)
            .map(|i| Segment::new(vertices[i], vertices[(i + 1) % count]))
            .collect();

        Ok(Self { vertices, segments })
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Axis-aligned rectangle wound `min, (max.x, min.y), max, (min.x, max.y)`.
    pub fn rectangle(min: Point, max: Point) -> Result<Self> {
        Self::new(vec![
            min,
            Point::new(max.x, min.y),
            max,
            Point::new(min.x, max.y),
        ])
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Boundary edges in vertex order, closing edge last.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn vertices_x(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.x).collect()
    }

    pub fn vertices_y(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.y).collect()
    }

    pub fn signed_area(&self) -> f64 {
        let count = self.vertices.len();
        let mut area = 0.0;
        for i in 0..count {
            let j = (i + 1) % count;
            area += self.vertices[i].x * self.vertices[j].y;
            area -= self.vertices[j].x * self.vertices[i].y;
        }
        area / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Even-odd containment. Points on an edge are not inside.
    pub fn contains(&self, point: &Point) -> bool {
        if self.segments.iter().any(|s| s.distance_to_point(point) == 0.0) {
            return false;
        }

        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let crossing_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x < crossing_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}
