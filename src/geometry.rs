//! Point and segment geometry used for snapping.
//!
//! Everything here is pure: functions take points by value and never hold
//! references into the drawing session.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in surface space.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A straight line between two committed points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        squared_distance(self.start, self.end).sqrt()
    }

    /// Closest point on this segment to `p`.
    pub fn project(&self, p: Point) -> Projection {
        project_onto_segment(p, self.start, self.end)
    }
}

/// Result of projecting a point onto a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Closest point on the segment
    pub point: Point,
    /// Squared distance from the projected point to the query point
    pub squared_distance: f64,
}

impl Projection {
    pub fn distance(&self) -> f64 {
        self.squared_distance.sqrt()
    }
}

/// Squared Euclidean distance between `a` and `b`.
pub fn squared_distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Projects `p` onto the segment `[v, w]`.
///
/// The projection parameter is clamped to `[0, 1]` so the returned point
/// always lies on the segment rather than on its infinite extension. A
/// zero-length segment projects everything onto `v`.
pub fn project_onto_segment(p: Point, v: Point, w: Point) -> Projection {
    let l2 = squared_distance(v, w);
    if l2 == 0.0 {
        return Projection {
            point: v,
            squared_distance: squared_distance(p, v),
        };
    }

    let t = ((p.x - v.x) * (w.x - v.x) + (p.y - v.y) * (w.y - v.y)) / l2;
    let point = v.lerp(w, t.clamp(0.0, 1.0));

    Projection {
        point,
        squared_distance: squared_distance(p, point),
    }
}

/// Distance from `p` to the segment `[v, w]`.
pub fn distance_to_segment(p: Point, v: Point, w: Point) -> f64 {
    project_onto_segment(p, v, w).distance()
}
