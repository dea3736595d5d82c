//! Point entity

use super::{Entity, EntityCommon};
use crate::types::{Attributes, Vector2, Vector3};

/// A POINT entity
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location (groups 10/20/30)
    pub location: Vector3,
}

impl Point {
    /// Create a point on a layer at the origin
    pub fn new(layer: impl Into<String>) -> Self {
        Point {
            common: EntityCommon::with_layer(layer),
            location: Vector3::ZERO,
        }
    }

    pub fn from_coords(layer: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Point {
            location: Vector3::new(x, y, z),
            ..Self::new(layer)
        }
    }

    /// Planar location for coordinate transforms
    pub fn planar_point(&self) -> Vector2 {
        self.location.xy()
    }
}

impl Entity for Point {
    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn attributes(&self) -> &Attributes {
        &self.common.attributes
    }

    fn entity_type(&self) -> &'static str {
        "POINT"
    }

    fn planar_points(&self) -> Vec<Vector2> {
        vec![self.planar_point()]
    }
}
