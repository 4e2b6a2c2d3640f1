// src/scene_lib/obstacle_set.rs

use std::collections::HashSet;

use log::debug;

use crate::config::EdgeDedup;
use crate::error::{Result, VisionError};
use crate::geometry::{Point, Segment};
use crate::scene_lib::polygon::ObstaclePolygon;

/// Whether the scene promises a closed boundary around the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enclosure {
    /// The first polygon is the scene boundary; the viewer must lie inside it.
    Bounded,
    /// No boundary. Bearings that hit nothing are left out of the result.
    Open,
}

/// Every obstacle in the scene, folded into deduplicated vertex and segment
/// lists. Both lists keep first-insertion order.
#[derive(Clone, Debug)]
pub struct ObstacleSet {
    polygons: Vec<ObstaclePolygon>,
    vertices: Vec<Point>,
    vertex_index: HashSet<Point>,
    segments: Vec<Segment>,
    segment_index: HashSet<Segment>,
    enclosure: Enclosure,
    edge_dedup: EdgeDedup,
}

impl ObstacleSet {
    fn empty(enclosure: Enclosure) -> Self {
        Self {
            polygons: Vec::new(),
            vertices: Vec::new(),
            vertex_index: HashSet::new(),
            segments: Vec::new(),
            segment_index: HashSet::new(),
            enclosure,
            edge_dedup: EdgeDedup::default(),
        }
    }

    pub fn bounded(boundary: ObstaclePolygon) -> Self {
        let mut set = Self::empty(Enclosure::Bounded);
        set.add_polygon(boundary);
        set
    }

    pub fn open() -> Self {
        Self::empty(Enclosure::Open)
    }

    /// Re-folds every polygon already added under the new policy.
    pub fn with_edge_dedup(mut self, edge_dedup: EdgeDedup) -> Self {
        self.edge_dedup = edge_dedup;
        let polygons = std::mem::take(&mut self.polygons);
        self.vertices.clear();
        self.vertex_index.clear();
        self.segments.clear();
        self.segment_index.clear();
        for polygon in polygons {
            self.add_polygon(polygon);
        }
        self
    }

    pub fn add_polygon(&mut self, polygon: ObstaclePolygon) {
        for vertex in polygon.vertices() {
            if self.vertex_index.insert(*vertex) {
                self.vertices.push(*vertex);
            }
        }

        for segment in polygon.segments() {
            let key = match self.edge_dedup {
                EdgeDedup::Ordered => *segment,
                EdgeDedup::Unordered => segment.canonical(),
            };
            if self.segment_index.insert(key) {
                self.segments.push(*segment);
            }
        }

        debug!(
            "added obstacle with {} vertices; scene now has {} vertices, {} segments",
            polygon.vertex_count(),
            self.vertices.len(),
            self.segments.len()
        );
        self.polygons.push(polygon);
    }

    pub fn polygons(&self) -> &[ObstaclePolygon] {
        &self.polygons
    }

    pub fn boundary(&self) -> Option<&ObstaclePolygon> {
        match self.enclosure {
            Enclosure::Bounded => self.polygons.first(),
            Enclosure::Open => None,
        }
    }

    pub fn enclosure(&self) -> Enclosure {
        self.enclosure
    }

    pub fn is_bounded(&self) -> bool {
        self.enclosure == Enclosure::Bounded
    }

    pub fn edge_dedup(&self) -> EdgeDedup {
        self.edge_dedup
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Fails when a bounded scene's boundary does not strictly contain `viewer`.
    pub fn check_viewer(&self, viewer: &Point) -> Result<()> {
        match self.boundary() {
            Some(boundary) if !boundary.contains(viewer) => Err(VisionError::ViewerOutsideBoundary {
                x: viewer.x,
                y: viewer.y,
            }),
            _ => Ok(()),
        }
    }
}

impl Extend<ObstaclePolygon> for ObstacleSet {
    fn extend<I: IntoIterator<Item = ObstaclePolygon>>(&mut self, iter: I) {
        for polygon in iter {
            self.add_polygon(polygon);
        }
    }
}
