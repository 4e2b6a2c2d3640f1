// src/vision_lib/sweep.rs

use std::f64::consts::{PI, TAU};

use log::{debug, trace, warn};

use crate::config::{IntersectOptions, SweepConfig};
use crate::error::{Result, VisionError};
use crate::geometry::Point;
use crate::intersection::{Intersection, Ray};
use crate::scene_lib::obstacle_set::ObstacleSet;
use crate::scene_lib::segment_query::SegmentQuery;
use crate::vision_lib::fan::{triangulate, FanMesh, Triangle};

/// The region visible from one viewer, as a loop of boundary points sorted
/// by bearing. The last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityPolygon {
    viewer: Point,
    intersections: Vec<Intersection>,
    points: Vec<Point>,
    enclosed: bool,
}

impl VisibilityPolygon {
    pub fn viewer(&self) -> Point {
        self.viewer
    }

    /// Every nearest hit kept by the sweep, sorted by ray angle.
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the scene boundary guarantees a hit on every bearing.
    pub fn is_enclosed(&self) -> bool {
        self.enclosed
    }

    pub fn area(&self) -> f64 {
        self.triangles().iter().map(Triangle::signed_area).sum::<f64>().abs()
    }

    pub fn triangles(&self) -> Vec<Triangle> {
        triangulate(self.viewer, &self.points)
    }

    pub fn mesh(&self) -> FanMesh {
        FanMesh::build(self.viewer, &self.points)
    }
}

/// Sweeps `obstacles` from `viewer` with a brute-force segment scan.
pub fn compute_visibility_polygon(
    viewer: Point,
    obstacles: &ObstacleSet,
    config: &SweepConfig,
) -> Result<VisibilityPolygon> {
    compute_with_query(viewer, obstacles, obstacles, config)
}

/// Sweep with the nearest-hit lookup delegated to `query`. Vertices and the
/// enclosure still come from `obstacles`.
pub fn compute_with_query<Q: SegmentQuery + ?Sized>(
    viewer: Point,
    obstacles: &ObstacleSet,
    query: &Q,
    config: &SweepConfig,
) -> Result<VisibilityPolygon> {
    config.validate()?;
    if !viewer.is_finite() {
        return Err(VisionError::NonFiniteViewer);
    }
    obstacles.check_viewer(&viewer)?;

    let bearings = candidate_bearings(viewer, obstacles.vertices(), config.angle_offset);

    let mut hits: Vec<(Intersection, bool)> = Vec::with_capacity(bearings.len());
    let mut dropped = 0usize;
    for (angle, exact) in bearings {
        match cast_ray(viewer, angle, query, &config.intersect) {
            Some(hit) => hits.push((hit, exact)),
            None => {
                dropped += 1;
                trace!("no obstacle along bearing {angle:.6}");
            }
        }
    }
    if dropped > 0 && obstacles.is_bounded() {
        warn!("{dropped} bearings escaped a bounded scene from ({}, {})", viewer.x, viewer.y);
    }

    // Stable, so equal angles keep vertex order.
    hits.sort_by(|a, b| a.0.angle.total_cmp(&b.0.angle));

    let points = if config.simplify {
        let boundary = hits
            .iter()
            .map(|(hit, exact)| BoundaryPoint { point: hit.point, exact: *exact })
            .collect();
        simplify_boundary(viewer, boundary, config.collinear_tolerance)
    } else {
        hits.iter().map(|(hit, _)| hit.point).collect()
    };
    let intersections: Vec<Intersection> = hits.into_iter().map(|(hit, _)| hit).collect();

    debug!(
        "visibility from ({}, {}): {} hits, {} dropped, {} boundary points",
        viewer.x,
        viewer.y,
        intersections.len(),
        dropped,
        points.len()
    );

    Ok(VisibilityPolygon {
        viewer,
        intersections,
        points,
        enclosed: obstacles.is_bounded(),
    })
}

/// Three bearings per vertex: `theta - offset`, `theta`, `theta + offset`,
/// all wrapped into `(-pi, pi]`.
pub fn candidate_angles(viewer: Point, vertices: &[Point], offset: f64) -> Vec<f64> {
    candidate_bearings(viewer, vertices, offset)
        .into_iter()
        .map(|(angle, _)| angle)
        .collect()
}

/// Same order as `candidate_angles`, flagging the ray aimed straight at its vertex.
fn candidate_bearings(viewer: Point, vertices: &[Point], offset: f64) -> Vec<(f64, bool)> {
    let mut bearings = Vec::with_capacity(vertices.len() * 3);
    for vertex in vertices {
        let theta = vertex.angle_from(&viewer);
        bearings.push((wrap_angle(theta - offset), false));
        bearings.push((wrap_angle(theta), true));
        bearings.push((wrap_angle(theta + offset), false));
    }
    bearings
}

/// Nearest obstacle along a single unit ray.
pub fn cast_ray<Q: SegmentQuery + ?Sized>(
    viewer: Point,
    angle: f64,
    query: &Q,
    options: &IntersectOptions,
) -> Option<Intersection> {
    let ray = Ray::from_angle(viewer, angle);
    query.nearest_hit(&ray, angle, options)
}

#[inline(always)]
fn wrap_angle(angle: f64) -> f64 {
    if angle > PI {
        angle - TAU
    } else if angle <= -PI {
        angle + TAU
    } else {
        angle
    }
}

/// A sorted boundary hit, remembering whether its ray was aimed at a vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BoundaryPoint {
    pub point: Point,
    pub exact: bool,
}

/// Drops repeated points and points lying on the straight run between
/// their neighbours. Loops with fewer than three corners are left alone.
///
/// `tolerance` is relative: two points repeat when their gap is within
/// `tolerance` of their distance to the viewer, and a point is on a straight
/// run when the sine of the turn it makes is within `tolerance`.
pub(crate) fn simplify_boundary(viewer: Point, boundary: Vec<BoundaryPoint>, tolerance: f64) -> Vec<Point> {
    let mut kept: Vec<BoundaryPoint> = Vec::with_capacity(boundary.len());
    for candidate in boundary {
        match kept.last_mut() {
            Some(last) if is_repeat(viewer, &last.point, &candidate.point, tolerance) => {
                // A hit aimed at the vertex beats its offset neighbours.
                if candidate.exact && !last.exact {
                    *last = candidate;
                }
            }
            _ => kept.push(candidate),
        }
    }
    while kept.len() > 1 && is_repeat(viewer, &kept[0].point, &kept[kept.len() - 1].point, tolerance) {
        if let Some(tail) = kept.pop() {
            if tail.exact && !kept[0].exact {
                kept[0] = tail;
            }
        }
    }

    let mut points: Vec<Point> = kept.into_iter().map(|p| p.point).collect();
    loop {
        let count = points.len();
        if count < 3 {
            break;
        }
        let keep: Vec<bool> = (0..count)
            .map(|i| {
                let prev = &points[(i + count - 1) % count];
                let next = &points[(i + 1) % count];
                !is_redundant(prev, &points[i], next, tolerance)
            })
            .collect();

        let kept = keep.iter().filter(|k| **k).count();
        if kept == count || kept < 3 {
            break;
        }
        let mut flags = keep.into_iter();
        points.retain(|_| flags.next().unwrap_or(true));
    }
    points
}

#[inline(always)]
fn is_repeat(viewer: Point, a: &Point, b: &Point, tolerance: f64) -> bool {
    let reach = a.distance(&viewer).max(b.distance(&viewer));
    a.distance(b) <= tolerance * reach
}

fn is_redundant(prev: &Point, point: &Point, next: &Point, tolerance: f64) -> bool {
    let incoming = point.as_dvec2() - prev.as_dvec2();
    let outgoing = next.as_dvec2() - point.as_dvec2();
    let scale = incoming.length() * outgoing.length();
    if scale == 0.0 {
        return false;
    }
    let sine = incoming.perp_dot(outgoing).abs() / scale;
    // Must also sit between its neighbours, not on a spike back along the line.
    sine <= tolerance && incoming.dot(outgoing) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_lib::polygon::ObstaclePolygon;
    use approx::assert_relative_eq;

    fn aimed(points: Vec<Point>) -> Vec<BoundaryPoint> {
        points.into_iter().map(|point| BoundaryPoint { point, exact: true }).collect()
    }

    #[test]
    fn wrap_angle_keeps_half_open_range() {
        assert_relative_eq!(wrap_angle(PI + 0.1), -PI + 0.1, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-PI - 0.1), PI - 0.1, epsilon = 1e-12);
        assert_eq!(wrap_angle(-PI), PI);
        assert_eq!(wrap_angle(0.5), 0.5);
    }

    #[test]
    fn three_angles_per_vertex() {
        let viewer = Point::new(0.0, 0.0);
        let angles = candidate_angles(viewer, &[Point::new(1.0, 0.0), Point::new(0.0, 1.0)], 1e-5);
        assert_eq!(angles.len(), 6);
        assert_relative_eq!(angles[0], -1e-5);
        assert_eq!(angles[1], 0.0);
        assert_relative_eq!(angles[5], std::f64::consts::FRAC_PI_2 + 1e-5);
    }

    #[test]
    fn simplify_removes_collinear_runs() {
        let points = vec![
            Point::new(0.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 5.0 + 1e-9),
        ];
        let simplified = simplify_boundary(Point::new(5.0, 5.0), aimed(points), 1e-6);
        assert_eq!(
            simplified,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn simplify_keeps_spikes() {
        // (4, 0) doubles back along the line; it is a real corner of the loop.
        let points = vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 3.0)];
        let simplified = simplify_boundary(Point::new(2.0, 1.0), aimed(points), 1e-6);
        assert!(simplified.contains(&Point::new(4.0, 0.0)));
    }

    #[test]
    fn repeats_keep_the_hit_aimed_at_the_vertex() {
        let corner = Point::new(1e-4, 1e-4);
        let boundary = vec![
            BoundaryPoint { point: Point::new(1e-4, 1e-4 - 1e-15), exact: false },
            BoundaryPoint { point: corner, exact: true },
            BoundaryPoint { point: Point::new(1e-4 - 1e-15, 1e-4), exact: false },
            BoundaryPoint { point: Point::new(-1e-4, 1e-4), exact: true },
            BoundaryPoint { point: Point::new(0.0, -1e-4), exact: true },
        ];
        let simplified = simplify_boundary(Point::new(0.0, 0.0), boundary, 1e-6);
        assert_eq!(simplified.len(), 3);
        assert_eq!(simplified[0], corner);
    }

    #[test]
    fn simplification_ignores_the_coordinate_scale() {
        // Square corners with offset hits 1e-5 of the reach away along each wall.
        for scale in [1e-4, 1.0, 1e4] {
            let viewer = Point::new(0.0, 0.0);
            let mut boundary = Vec::new();
            for (cx, cy) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let corner = Point::new(cx * scale, cy * scale);
                let along_x = Point::new((cx - cx * 1e-5) * scale, cy * scale);
                let along_y = Point::new(cx * scale, (cy - cy * 1e-5) * scale);
                let (before, after) = if cx * cy > 0.0 { (along_y, along_x) } else { (along_x, along_y) };
                boundary.push(BoundaryPoint { point: before, exact: false });
                boundary.push(BoundaryPoint { point: corner, exact: true });
                boundary.push(BoundaryPoint { point: after, exact: false });
            }
            let simplified = simplify_boundary(viewer, boundary, 1e-6);
            assert_eq!(
                simplified,
                vec![
                    Point::new(-scale, -scale),
                    Point::new(scale, -scale),
                    Point::new(scale, scale),
                    Point::new(-scale, scale),
                ],
                "scale {scale}"
            );
        }
    }

    #[test]
    fn rejects_non_finite_viewer() {
        let set = ObstacleSet::open();
        let result = compute_visibility_polygon(Point::new(f64::NAN, 0.0), &set, &SweepConfig::default());
        assert_eq!(result, Err(VisionError::NonFiniteViewer));
    }

    #[test]
    fn rejects_invalid_config() {
        let set = ObstacleSet::open();
        let config = SweepConfig::default().with_angle_offset(0.0);
        assert!(matches!(
            compute_visibility_polygon(Point::new(0.0, 0.0), &set, &config),
            Err(VisionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_open_scene_sees_nothing() {
        let set = ObstacleSet::open();
        let vis = compute_visibility_polygon(Point::new(1.0, 1.0), &set, &SweepConfig::default()).unwrap();
        assert!(vis.is_empty());
        assert!(!vis.is_enclosed());
        assert!(vis.triangles().is_empty());
        assert!(vis.mesh().is_empty());
    }

    #[test]
    fn open_scene_drops_bearings_without_hits() {
        let mut set = ObstacleSet::open();
        set.add_polygon(ObstaclePolygon::rectangle(Point::new(10.0, -1.0), Point::new(12.0, 1.0)).unwrap());
        let config = SweepConfig::default().with_simplify(false);
        let vis = compute_visibility_polygon(Point::new(0.0, 0.0), &set, &config).unwrap();
        // Each of the 4 corners casts 3 rays; the outer offset rays at the two
        // silhouette corners escape.
        assert_eq!(vis.intersections().len(), 10);
        assert!(vis.points().iter().all(|p| p.x >= 10.0 - 1e-9));
    }
}
