// src/generator.rs

use std::f64::consts::TAU;

use rand::Rng;

use crate::error::{Result, VisionError};
use crate::geometry::Point;
use crate::scene_lib::{ObstacleSet, ObstaclePolygon};

pub struct PolygonGenerator;

impl PolygonGenerator {
    /// Star-shaped loop around `center`: jittered angles, radius within 20% of `avg_radius`.
    pub fn generate_polygon<R: Rng>(
        rng: &mut R,
        center: Point,
        avg_radius: f64,
        num_vertices: usize,
    ) -> Result<ObstaclePolygon> {
        Self::generate(rng, center, avg_radius * 0.8, avg_radius * 1.2, num_vertices)
    }

    /// Vertices on a circle at increasing jittered angles, so the loop is convex.
    pub fn generate_convex_polygon<R: Rng>(
        rng: &mut R,
        center: Point,
        radius: f64,
        num_vertices: usize,
    ) -> Result<ObstaclePolygon> {
        Self::generate(rng, center, radius, radius, num_vertices)
    }

    fn generate<R: Rng>(
        rng: &mut R,
        center: Point,
        min_radius: f64,
        max_radius: f64,
        num_vertices: usize,
    ) -> Result<ObstaclePolygon> {
        if num_vertices < 3 {
            return Err(VisionError::TooFewVertices { count: num_vertices });
        }

        let step = TAU / num_vertices as f64;
        let max_perturbation = step * 0.15;

        let mut angles: Vec<f64> = (0..num_vertices)
            .map(|i| i as f64 * step + rng.gen_range(-max_perturbation..max_perturbation))
            .collect();
        for i in 1..num_vertices {
            if angles[i] <= angles[i - 1] {
                angles[i] = angles[i - 1] + 0.01;
            }
        }

        let points = angles
            .into_iter()
            .map(|angle| {
                let radius = if max_radius > min_radius {
                    rng.gen_range(min_radius..max_radius)
                } else {
                    min_radius
                };
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect();

        ObstaclePolygon::new(points)
    }

    /// A `width` x `height` rectangle boundary holding `obstacle_count`
    /// random obstacles that stay clear of the walls.
    ///
    /// Obstacles keep a margin of at least one unit from each wall, so a scene
    /// that has obstacles must be wider and taller than twice that margin.
    pub fn generate_bounded_scene<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        obstacle_count: usize,
    ) -> Result<ObstacleSet> {
        let too_small = VisionError::InvalidSceneSize { width, height };
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(too_small);
        }

        let max_radius = width.min(height) * 0.06;
        let margin = max_radius * 1.2 + 1.0;
        if obstacle_count > 0 && (width <= 2.0 * margin || height <= 2.0 * margin) {
            return Err(too_small);
        }

        let boundary = ObstaclePolygon::rectangle(Point::new(0.0, 0.0), Point::new(width, height))?;
        let mut scene = ObstacleSet::bounded(boundary);
        for _ in 0..obstacle_count {
            let center = Point::new(
                rng.gen_range(margin..width - margin),
                rng.gen_range(margin..height - margin),
            );
            let radius = rng.gen_range(max_radius * 0.3..max_radius);
            let num_vertices = rng.gen_range(3..=8);
            scene.add_polygon(Self::generate_polygon(rng, center, radius, num_vertices)?);
        }
        Ok(scene)
    }
}
