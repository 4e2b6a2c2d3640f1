// src/config.rs

use crate::error::{Result, VisionError};

/// Angular offset either side of a vertex bearing, in radians.
pub const DEFAULT_ANGLE_OFFSET: f64 = 1e-5;
/// Sine of the angle below which a ray and a segment count as parallel.
pub const DEFAULT_PARALLEL_EPSILON: f64 = 1e-10;
/// Slack on the segment parameter so a ray aimed at a shared vertex still hits.
pub const DEFAULT_ENDPOINT_TOLERANCE: f64 = 1e-9;
/// Relative tolerance for boundary simplification: the sine of a turn small
/// enough to count as straight, and the fraction of the viewer distance under
/// which two points repeat.
pub const DEFAULT_COLLINEAR_TOLERANCE: f64 = 1e-6;

/// How the intersector decides a ray and a segment are parallel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParallelCheck {
    /// `|d_ray x d_seg| <= epsilon * |d_ray| * |d_seg|`.
    Determinant { epsilon: f64 },
    /// Compare the normalized directions with exact float equality.
    /// Fragile, kept for reproducing legacy scenes.
    ExactUnitDirection,
}

impl Default for ParallelCheck {
    fn default() -> Self {
        ParallelCheck::Determinant { epsilon: DEFAULT_PARALLEL_EPSILON }
    }
}

/// Whether `(A, B)` and `(B, A)` collapse into one obstacle edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeDedup {
    /// Only identical endpoint order collapses.
    #[default]
    Ordered,
    /// Reverse twins collapse into the first edge seen.
    Unordered,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectOptions {
    pub parallel: ParallelCheck,
    pub endpoint_tolerance: f64,
}

impl Default for IntersectOptions {
    fn default() -> Self {
        Self {
            parallel: ParallelCheck::default(),
            endpoint_tolerance: DEFAULT_ENDPOINT_TOLERANCE,
        }
    }
}

/// Tunables for the radial sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub angle_offset: f64,
    pub intersect: IntersectOptions,
    /// Drop duplicate and collinear boundary points.
    pub simplify: bool,
    /// Relative to viewer distances and edge lengths, not an absolute distance.
    pub collinear_tolerance: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            angle_offset: DEFAULT_ANGLE_OFFSET,
            intersect: IntersectOptions::default(),
            simplify: true,
            collinear_tolerance: DEFAULT_COLLINEAR_TOLERANCE,
        }
    }
}

impl SweepConfig {
    pub fn with_angle_offset(mut self, angle_offset: f64) -> Self {
        self.angle_offset = angle_offset;
        self
    }

    pub fn with_parallel_check(mut self, parallel: ParallelCheck) -> Self {
        self.intersect.parallel = parallel;
        self
    }

    pub fn with_endpoint_tolerance(mut self, tolerance: f64) -> Self {
        self.intersect.endpoint_tolerance = tolerance;
        self
    }

    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    pub fn with_collinear_tolerance(mut self, tolerance: f64) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.angle_offset.is_finite() || self.angle_offset <= 0.0 {
            return Err(VisionError::InvalidConfig("angle offset must be positive and finite"));
        }
        // Larger offsets would sample bearings that no longer belong to the vertex.
        if self.angle_offset >= 0.01 {
            return Err(VisionError::InvalidConfig("angle offset must be below 0.01 rad"));
        }
        if let ParallelCheck::Determinant { epsilon } = self.intersect.parallel {
            if !epsilon.is_finite() || epsilon < 0.0 {
                return Err(VisionError::InvalidConfig("parallel epsilon must be finite and non-negative"));
            }
        }
        let tolerance = self.intersect.endpoint_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(VisionError::InvalidConfig("endpoint tolerance must be finite and non-negative"));
        }
        if !self.collinear_tolerance.is_finite() || self.collinear_tolerance < 0.0 {
            return Err(VisionError::InvalidConfig("collinear tolerance must be finite and non-negative"));
        }
        Ok(())
    }
}
