//! Geometry kernel shared by routing and the spatial searches.
//!
//! Everything here is a pure function over value types so the numeric
//! routines can be tested without a catalog.

use serde::{Deserialize, Serialize};

/// Cartesian coordinates in the galactic reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculate the Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Shift this point by the coordinates of `offset`.
    pub fn translate(&self, offset: &Self) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            z: self.z + offset.z,
        }
    }

    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn minus(&self, other: &Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    a.distance_to(b)
}

/// Observer heading expressed as yaw and pitch in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Heading {
    pub yaw: f64,
    pub pitch: f64,
}

impl Heading {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Unit direction vector for this heading.
    pub fn direction(&self) -> Point {
        let yaw = radians(self.yaw);
        let pitch = radians(self.pitch);
        Point {
            x: yaw.cos() * pitch.cos(),
            y: yaw.sin() * pitch.cos(),
            z: pitch.sin(),
        }
    }
}

/// Convert an angle in degrees to radians.
pub fn radians(angle: f64) -> f64 {
    angle * (std::f64::consts::PI / 180.0)
}

/// Project a point `magnitude` units along `heading` from `origin`.
pub fn project(origin: &Point, heading: Heading, magnitude: f64) -> Point {
    let direction = heading.direction();
    Point {
        x: origin.x + magnitude * direction.x,
        y: origin.y + magnitude * direction.y,
        z: origin.z + magnitude * direction.z,
    }
}

/// Quadratic line-sphere test.
///
/// The line runs through `start` and `end`; the sphere of `radius` sits at
/// `centre`. Returns `true` when the discriminant `b² − 4ac` is non-negative.
/// A zero-length line degrades to a point-in-sphere check.
pub fn line_intersects_sphere(start: &Point, end: &Point, centre: &Point, radius: f64) -> bool {
    let direction = end.minus(start);
    let a = direction.dot(&direction);
    if a == 0.0 {
        return start.distance_to(centre) <= radius;
    }
    let b = 2.0 * direction.dot(&start.minus(centre));
    let c = centre.dot(centre) + start.dot(start) - 2.0 * centre.dot(start) - radius * radius;
    b * b - 4.0 * a * c >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 6.0, 3.0);
        assert!((distance(&a, &b) - 5.0).abs() < EPSILON);
        assert!((distance(&b, &a) - 5.0).abs() < EPSILON);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn project_along_axes() {
        let forward = project(&Point::ORIGIN, Heading::new(0.0, 0.0), 5.0);
        assert!((forward.x - 5.0).abs() < EPSILON);
        assert!(forward.y.abs() < EPSILON && forward.z.abs() < EPSILON);

        let left = project(&Point::new(1.0, 1.0, 1.0), Heading::new(90.0, 0.0), 2.0);
        assert!((left.x - 1.0).abs() < EPSILON);
        assert!((left.y - 3.0).abs() < EPSILON);

        let up = project(&Point::ORIGIN, Heading::new(45.0, 90.0), 3.0);
        assert!((up.z - 3.0).abs() < EPSILON);
        assert!(up.x.abs() < EPSILON && up.y.abs() < EPSILON);
    }

    #[test]
    fn translate_adds_offsets() {
        let moved = Point::new(1.0, -2.0, 0.5).translate(&Point::new(10.0, 10.0, 10.0));
        assert_eq!(moved, Point::new(11.0, 8.0, 10.5));
    }

    #[test]
    fn sphere_on_line_intersects_at_zero_radius() {
        let start = Point::ORIGIN;
        let end = Point::new(5.0, 0.0, 0.0);
        assert!(line_intersects_sphere(&start, &end, &Point::new(5.0, 0.0, 0.0), 0.0));
        assert!(line_intersects_sphere(&start, &end, &Point::new(-40.0, 0.0, 0.0), 0.0));
    }

    #[test]
    fn sphere_touching_line_counts_and_short_one_misses() {
        let start = Point::ORIGIN;
        let end = Point::new(5.0, 0.0, 0.0);
        let centre = Point::new(3.0, 10.0, 0.0);
        assert!(line_intersects_sphere(&start, &end, &centre, 10.0));
        assert!(!line_intersects_sphere(&start, &end, &centre, 8.0));
    }

    #[test]
    fn zero_length_line_uses_point_distance() {
        let start = Point::new(1.0, 1.0, 1.0);
        assert!(line_intersects_sphere(&start, &start, &Point::new(1.0, 3.0, 1.0), 2.0));
        assert!(!line_intersects_sphere(&start, &start, &Point::new(1.0, 3.0, 1.0), 1.5));
    }
}
