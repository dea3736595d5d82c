//! Planar extents of parsed geometry

use super::Vector2;

/// Axis-aligned 2D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Lower-left corner
    pub min: Vector2,
    /// Upper-right corner
    pub max: Vector2,
}

impl BoundingBox2D {
    pub fn new(min: Vector2, max: Vector2) -> Self {
        BoundingBox2D { min, max }
    }

    pub fn from_point(point: Vector2) -> Self {
        BoundingBox2D {
            min: point,
            max: point,
        }
    }

    /// Smallest box containing every point, `None` for an empty input
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |bb, p| bb.expanded(p)))
    }

    /// Grow the box to include a point
    pub fn expanded(self, point: Vector2) -> Self {
        BoundingBox2D {
            min: Vector2::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Vector2::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Union of two boxes
    pub fn merge(&self, other: &BoundingBox2D) -> Self {
        self.expanded(other.min).expanded(other.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
