// src/vision_lib/mod.rs

pub mod sweep;
pub mod fan;
pub mod vertex;

pub use sweep::{candidate_angles, cast_ray, compute_visibility_polygon, compute_with_query, VisibilityPolygon};
pub use fan::{triangulate, FanMesh, Triangle};
pub use vertex::FanVertex;
