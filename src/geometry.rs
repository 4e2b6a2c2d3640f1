// src/geometry.rs

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// A point in the plane. Equality and hashing use the exact coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Bearing of `self` as seen from `origin`, in `[-pi, pi]`.
    pub fn angle_from(&self, origin: &Point) -> f64 {
        (self.y - origin.y).atan2(self.x - origin.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    // Adding 0.0 folds -0.0 into 0.0 so both hash alike.
    #[inline(always)]
    fn bits(&self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }

    fn lexical_cmp(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.as_dvec2()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// One opaque obstacle edge.
///
/// Equality is order-sensitive: `(a, b)` and `(b, a)` are different segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    p1: Point,
    p2: Point,
}

impl Segment {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn direction(&self) -> DVec2 {
        self.p2.as_dvec2() - self.p1.as_dvec2()
    }

    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    pub fn reversed(&self) -> Segment {
        Segment::new(self.p2, self.p1)
    }

    pub fn is_reverse_of(&self, other: &Segment) -> bool {
        self.p1 == other.p2 && self.p2 == other.p1
    }

    /// Endpoint order shared by a segment and its reverse twin.
    pub fn canonical(&self) -> Segment {
        match self.p1.lexical_cmp(&self.p2) {
            Ordering::Greater => self.reversed(),
            _ => *self,
        }
    }

    pub fn distance_to_point(&self, point: &Point) -> f64 {
        let start = self.p1.as_dvec2();
        let d = self.direction();
        let p = point.as_dvec2();
        let len_sq = d.length_squared();
        if len_sq == 0.0 {
            return start.distance(p);
        }
        let t = ((p - start).dot(d) / len_sq).clamp(0.0, 1.0);
        (start + d * t).distance(p)
    }
}
