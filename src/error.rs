// src/error.rs

use thiserror::Error;

/// Errors raised while building a scene or running a sweep.
///
/// Geometric degeneracies (parallel rays, zero-length edges) are not errors;
/// they simply produce no intersection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisionError {
    #[error("obstacle polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("obstacle vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    #[error("viewer has a non-finite coordinate")]
    NonFiniteViewer,

    #[error("viewer ({x}, {y}) is not inside the scene boundary")]
    ViewerOutsideBoundary { x: f64, y: f64 },

    #[error("scene of {width} x {height} cannot hold generated obstacles")]
    InvalidSceneSize { width: f64, height: f64 },

    #[error("invalid sweep configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, VisionError>;
