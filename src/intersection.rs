// src/intersection.rs

use glam::DVec2;

use crate::config::{IntersectOptions, ParallelCheck};
use crate::geometry::{Point, Segment};

/// Half-line `origin + t * direction`, `t >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: DVec2,
}

impl Ray {
    pub fn new(origin: Point, direction: DVec2) -> Self {
        Self { origin, direction }
    }

    /// Unit-direction ray, so hit distances are Euclidean.
    pub fn from_angle(origin: Point, angle: f64) -> Self {
        Self::new(origin, DVec2::new(angle.cos(), angle.sin()))
    }

    pub fn through(origin: Point, target: Point) -> Self {
        Self::new(origin, target.as_dvec2() - origin.as_dvec2())
    }

    pub fn point_at(&self, t: f64) -> Point {
        Point::from(self.origin.as_dvec2() + self.direction * t)
    }
}

/// Where a ray first meets a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point,
    /// Ray parameter of the hit; Euclidean distance for unit rays.
    pub distance: f64,
    /// Bearing of the ray that produced the hit.
    pub angle: f64,
}

pub fn intersect(segment: &Segment, ray: &Ray, ray_angle: f64) -> Option<Intersection> {
    intersect_with(segment, ray, ray_angle, &IntersectOptions::default())
}

/// Solves `ray.origin + t_ray * d_ray = seg.p1 + t_seg * d_seg`.
///
/// Parallel rays, zero-length segments, hits behind the origin and hits off
/// the segment all return `None`. Hits exactly on an endpoint are kept.
pub fn intersect_with(
    segment: &Segment,
    ray: &Ray,
    ray_angle: f64,
    options: &IntersectOptions,
) -> Option<Intersection> {
    let d_ray = ray.direction;
    let d_seg = segment.direction();

    let denominator = d_ray.perp_dot(d_seg);
    if is_parallel(d_ray, d_seg, denominator, options.parallel) {
        return None;
    }

    let w = segment.p1().as_dvec2() - ray.origin.as_dvec2();
    let t_ray = w.perp_dot(d_seg) / denominator;
    let t_seg = w.perp_dot(d_ray) / denominator;

    if t_ray < 0.0 {
        return None;
    }

    let tolerance = options.endpoint_tolerance;
    if t_seg < -tolerance || t_seg > 1.0 + tolerance {
        return None;
    }

    Some(Intersection {
        point: ray.point_at(t_ray),
        distance: t_ray,
        angle: ray_angle,
    })
}

#[inline(always)]
fn is_parallel(d_ray: DVec2, d_seg: DVec2, denominator: f64, check: ParallelCheck) -> bool {
    if !denominator.is_finite() {
        return true;
    }
    match check {
        ParallelCheck::Determinant { epsilon } => {
            denominator.abs() <= epsilon * d_ray.length() * d_seg.length()
        }
        ParallelCheck::ExactUnitDirection => {
            // Opposite directions slip past the unit test; a zero determinant must not.
            denominator == 0.0 || d_ray.normalize() == d_seg.normalize()
        }
    }
}
