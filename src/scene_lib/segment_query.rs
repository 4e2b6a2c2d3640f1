// src/scene_lib/segment_query.rs

use crate::config::IntersectOptions;
use crate::geometry::Segment;
use crate::intersection::{intersect_with, Intersection, Ray};
use crate::scene_lib::obstacle_set::ObstacleSet;

/// Finds the first obstacle a ray meets.
///
/// The provided `nearest_hit` scans every segment. A spatial index can
/// override it without the sweep noticing.
pub trait SegmentQuery {
    fn segments(&self) -> &[Segment];

    fn nearest_hit(&self, ray: &Ray, angle: f64, options: &IntersectOptions) -> Option<Intersection> {
        let mut closest: Option<Intersection> = None;
        for segment in self.segments() {
            if let Some(hit) = intersect_with(segment, ray, angle, options) {
                match closest {
                    // Ties keep the segment seen first.
                    Some(best) if best.distance <= hit.distance => {}
                    _ => closest = Some(hit),
                }
            }
        }
        closest
    }
}

impl SegmentQuery for ObstacleSet {
    fn segments(&self) -> &[Segment] {
        ObstacleSet::segments(self)
    }
}

impl SegmentQuery for [Segment] {
    fn segments(&self) -> &[Segment] {
        self
    }
}
