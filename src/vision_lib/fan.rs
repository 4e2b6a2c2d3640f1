// src/vision_lib/fan.rs

use bytemuck::{Pod, Zeroable};

use crate::geometry::Point;
use crate::vision_lib::vertex::FanVertex;

/// One slice of the fan: the viewer and two consecutive boundary points.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Triangle {
    pub viewer: Point,
    pub a: Point,
    pub b: Point,
}

impl Triangle {
    pub fn signed_area(&self) -> f64 {
        let ab = self.a.as_dvec2() - self.viewer.as_dvec2();
        let ac = self.b.as_dvec2() - self.viewer.as_dvec2();
        ab.perp_dot(ac) / 2.0
    }
}

/// `(viewer, p[i], p[i + 1])` for every `i`, the last point wrapping to the first.
///
/// Fewer than two points give no triangles; an empty result means nothing is
/// visible.
pub fn triangulate(viewer: Point, points: &[Point]) -> Vec<Triangle> {
    if points.len() < 2 {
        return Vec::new();
    }
    let count = points.len();
    (0..count)
        .map(|i| Triangle {
            viewer,
            a: points[i],
            b: points[(i + 1) % count],
        })
        .collect()
}

/// Indexed triangle fan. Vertex 0 is the viewer, vertex `i + 1` is `points[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FanMesh {
    pub vertices: Vec<FanVertex>,
    pub indices: Vec<u32>,
}

impl FanMesh {
    pub fn build(viewer: Point, points: &[Point]) -> Self {
        let mut mesh = Self::default();
        if points.len() < 2 {
            return mesh;
        }

        mesh.vertices.reserve(points.len() + 1);
        mesh.vertices.push(FanVertex::from(viewer));
        for point in points {
            mesh.vertices.push(FanVertex::from(*point));
        }

        let count = points.len() as u32;
        mesh.indices.reserve(points.len() * 3);
        for i in 1..=count {
            mesh.indices.push(0);
            mesh.indices.push(i);
            mesh.indices.push(i % count + 1);
        }
        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
