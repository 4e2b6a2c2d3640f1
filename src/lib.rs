// src/lib.rs

//! Visibility polygons from a single viewer among opaque line-segment
//! obstacles, computed with a radial sweep over the obstacle vertices.

pub mod config;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod generator;
pub mod scene_lib;
pub mod vision_lib;

pub use config::{EdgeDedup, IntersectOptions, ParallelCheck, SweepConfig};
pub use error::{Result, VisionError};
pub use geometry::{Point, Segment};
pub use intersection::{intersect, intersect_with, Intersection, Ray};
pub use generator::PolygonGenerator;
pub use scene_lib::{Enclosure, ObstacleSet, ObstaclePolygon, SegmentQuery};
pub use vision_lib::{
    cast_ray, compute_visibility_polygon, compute_with_query, triangulate, FanMesh, FanVertex,
    Triangle, VisibilityPolygon,
};
