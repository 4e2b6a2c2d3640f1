// tests/helpers/mod.rs
// Shared fixtures and assertions for the integration tests.

#![allow(dead_code)]

use sightline::{ObstaclePolygon, ObstacleSet, Point, Segment};

pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 600.0;
pub const TOLERANCE: f64 = 1e-6;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn viewer() -> Point {
    Point::new(WIDTH / 2.0, HEIGHT / 2.0)
}

pub fn room() -> ObstacleSet {
    scaled_room(1.0)
}

pub fn scaled_room(scale: f64) -> ObstacleSet {
    ObstacleSet::bounded(
        ObstaclePolygon::rectangle(Point::new(0.0, 0.0), Point::new(WIDTH * scale, HEIGHT * scale)).unwrap(),
    )
}

pub fn poly(coords: &[(f64, f64)]) -> ObstaclePolygon {
    ObstaclePolygon::from_coords(coords).unwrap()
}

/// Room with a square hanging between the centre viewer and the top wall.
pub fn room_with_square() -> ObstacleSet {
    scaled_room_with_square(1.0)
}

pub fn scaled_room_with_square(scale: f64) -> ObstacleSet {
    let mut scene = scaled_room(scale);
    scene.add_polygon(
        ObstaclePolygon::rectangle(Point::new(350.0 * scale, 100.0 * scale), Point::new(450.0 * scale, 150.0 * scale))
            .unwrap(),
    );
    scene
}

/// The hand-placed obstacle layout used for interactive checks of the engine.
pub fn demo_scene() -> ObstacleSet {
    let mut scene = room();
    scene.extend([
        poly(&[(100.0, 150.0), (120.0, 35.0), (220.0, 95.0), (140.0, 230.0)]),
        poly(&[(110.0, 220.0), (150.0, 250.0), (260.0, 300.0)]),
        poly(&[(180.0, 220.0), (220.0, 150.0), (300.0, 200.0), (350.0, 320.0)]),
        poly(&[(320.0, 60.0), (340.0, 40.0), (400.0, 120.0)]),
        poly(&[(450.0, 190.0), (560.0, 170.0), (540.0, 270.0), (430.0, 290.0)]),
        poly(&[(400.0, 95.0), (495.0, 50.0), (480.0, 150.0)]),
        poly(&[(450.0, 450.0), (560.0, 490.0), (540.0, 510.0), (430.0, 450.0)]),
        poly(&[(10.0, 450.0), (100.0, 510.0), (100.0, 490.0), (50.0, 450.0)]),
        poly(&[(760.0, 470.0), (650.0, 490.0), (605.0, 570.0), (630.0, 590.0)]),
        poly(&[(360.0, 470.0), (250.0, 490.0), (205.0, 570.0), (230.0, 590.0)]),
    ]);
    scene
}

pub fn distance_to_nearest_segment(point: &Point, segments: &[Segment]) -> f64 {
    segments
        .iter()
        .map(|s| s.distance_to_point(point))
        .fold(f64::INFINITY, f64::min)
}

pub fn assert_point_near(actual: Point, expected: Point, tolerance: f64) {
    assert!(
        actual.distance(&expected) <= tolerance,
        "expected ({}, {}), got ({}, {})",
        expected.x,
        expected.y,
        actual.x,
        actual.y
    );
}

pub fn contains_point_near(points: &[Point], expected: Point, tolerance: f64) -> bool {
    points.iter().any(|p| p.distance(&expected) <= tolerance)
}
