// src/scene_lib/mod.rs

pub mod polygon;
pub mod obstacle_set;
pub mod segment_query;

pub use polygon::ObstaclePolygon;
pub use obstacle_set::{Enclosure, ObstacleSet};
pub use segment_query::SegmentQuery;
