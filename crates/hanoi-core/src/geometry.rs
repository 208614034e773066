//! 2D points and axis-aligned rectangles in surface-local coordinates.

use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A point on the drawing surface. Y grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + self.width
            && point.y >= self.position.y
            && point.y < self.position.y + self.height
    }

    pub fn centre(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtract_is_non_mutating() {
        let a = Point::new(10.0, 7.0);
        let b = Point::new(4.0, 9.0);

        let delta = a - b;

        assert_eq!(delta, Point::new(6.0, -2.0));
        assert_eq!(a, Point::new(10.0, 7.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
        assert!((b.distance_to(a) - 5.0).abs() < f64::EPSILON);
        assert!(a.distance_to(a).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_half_open() {
        let rect = Rect::new(Point::new(10.0, 20.0), 60.0, 15.0);

        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(69.9, 34.9)));
        assert!(!rect.contains(Point::new(70.0, 25.0)));
        assert!(!rect.contains(Point::new(30.0, 35.0)));
        assert!(!rect.contains(Point::new(9.9, 25.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
