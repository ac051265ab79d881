//! Small geometric types shared by regions and their derived features.
//!
//! Lines use the normalized normal form `a x + b y + c = 0` with
//! `sqrt(a^2 + b^2) = 1`; intersections are computed as the homogeneous cross
//! product of the two line vectors.
use nalgebra::{Point2, Vector3};
use serde::{Deserialize, Serialize};

const EPS: f64 = 1e-12;

/// Integer pixel position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both points lie in each other's 8-neighbourhood (or coincide).
    #[inline]
    pub fn is_adjacent8(&self, other: &Point) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

/// Axis-aligned pixel rectangle with an exclusive max corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    pub const fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0)
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// True when `other` lies completely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// Infinite line in normalized normal form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Build from raw coefficients; `None` when `(a, b)` is degenerate.
    pub fn new(a: f64, b: f64, c: f64) -> Option<Self> {
        let norm = (a * a + b * b).sqrt();
        if !norm.is_finite() || norm < EPS {
            return None;
        }
        Some(Self {
            a: a / norm,
            b: b / norm,
            c: c / norm,
        })
    }

    /// Line through two distinct points.
    pub fn through(p0: Point2<f64>, p1: Point2<f64>) -> Option<Self> {
        let a = p1.y - p0.y;
        let b = p0.x - p1.x;
        let c = p1.x * p0.y - p0.x * p1.y;
        Self::new(a, b, c)
    }

    /// Line through `p` with direction angle `theta` (radians, image axes).
    pub fn from_point_angle(p: Point2<f64>, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        // normal is the direction rotated by +90 degrees
        let a = -s;
        let b = c;
        Self {
            a,
            b,
            c: -(a * p.x + b * p.y),
        }
    }

    pub fn homogeneous(&self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Signed distance of `p` to the line.
    pub fn distance(&self, p: Point2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Intersection point; `None` for parallel (or identical) lines.
    pub fn intersection(&self, other: &Line) -> Option<Point2<f64>> {
        let v = self.homogeneous().cross(&other.homogeneous());
        let w = v[2];
        if !w.is_finite() || w.abs() <= EPS {
            return None;
        }
        Some(Point2::new(v[0] / w, v[1] / w))
    }
}

/// Intersection of two lines given in normal form; see [`Line::intersection`].
pub fn line_intersection(l0: &Line, l1: &Line) -> Option<Point2<f64>> {
    l0.intersection(l1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn perpendicular_lines_intersect_at_crossing() {
        let horizontal = Line::from_point_angle(Point2::new(0.0, 3.0), 0.0);
        let vertical = Line::from_point_angle(Point2::new(5.0, 0.0), std::f64::consts::FRAC_PI_2);
        let p = line_intersection(&horizontal, &vertical).expect("lines cross");
        assert!(approx(p.x, 5.0) && approx(p.y, 3.0), "got {p:?}");
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let l0 = Line::through(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).unwrap();
        let l1 = Line::through(Point2::new(0.0, 1.0), Point2::new(1.0, 2.0)).unwrap();
        assert!(l0.intersection(&l1).is_none());
    }

    #[test]
    fn through_is_normalized_and_passes_points() {
        let p0 = Point2::new(1.0, 2.0);
        let p1 = Point2::new(4.0, 6.0);
        let l = Line::through(p0, p1).unwrap();
        assert!(approx(l.a * l.a + l.b * l.b, 1.0));
        assert!(approx(l.distance(p0), 0.0));
        assert!(approx(l.distance(p1), 0.0));
        assert!(Line::through(p0, p0).is_none());
    }

    #[test]
    fn rect_union_and_containment() {
        let a = Rect::new(2, 2, 5, 5);
        let b = Rect::new(4, 1, 6, 3);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(2, 1, 6, 5));
        assert!(u.contains_rect(&a) && u.contains_rect(&b));
        assert!(!a.contains_rect(&b));
        assert_eq!(a.area(), 9);
        assert!(a.contains(4, 4) && !a.contains(5, 4));
    }
}
