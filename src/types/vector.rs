//! Coordinate types for parsed geometry

use std::fmt;
use std::ops::{Add, Sub};

/// Planar coordinate pair in the drawing's projected system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Vector2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Vector2::ZERO
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Location read from a 10/20/30 group triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Drop the Z coordinate
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn distance(&self, other: &Vector3) -> f64 {
        let d = *self - *other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_xy() {
        let v = Vector3::new(600000.0, 200000.0, 512.0);
        assert_eq!(v.xy(), Vector2::new(600000.0, 200000.0));
    }

    #[test]
    fn test_distances() {
        assert_eq!(Vector2::new(0.0, 0.0).distance(&Vector2::new(3.0, 4.0)), 5.0);
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(1.0, 1.0, 3.0);
        assert_eq!(a.distance(&b), 2.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(10.0, 20.5, 0.0).to_string(), "(10, 20.5, 0)");
    }
}
