//! Drawing entities read from the ENTITIES section

use crate::types::{Attributes, BoundingBox2D, Vector2};

pub mod point;
pub mod polyline;

pub use point::Point;
pub use polyline::{Polyline, PolylineFlags, Vertex};

/// Behaviour shared by every decoded entity
pub trait Entity {
    /// Name of the layer the entity sits on (group 8)
    fn layer(&self) -> &str;

    /// Free-form groups that followed the entity's fixed groups
    fn attributes(&self) -> &Attributes;

    /// Entity type tag as written in the file
    fn entity_type(&self) -> &'static str;

    /// Planar coordinates in file order, as handed to coordinate transforms
    fn planar_points(&self) -> Vec<Vector2>;

    /// Planar extents, `None` when the entity has no coordinates
    fn bounding_box(&self) -> Option<BoundingBox2D> {
        BoundingBox2D::from_points(self.planar_points())
    }

    /// Raw value of a free-form group code
    fn attribute(&self, code: &str) -> Option<&str> {
        self.attributes().get(code).map(String::as_str)
    }
}

/// Data common to all entities
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityCommon {
    /// Layer name
    pub layer: String,
    /// Free-form groups in file order
    pub attributes: Attributes,
}

impl EntityCommon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            attributes: Attributes::new(),
        }
    }
}

/// The closed set of entity kinds the reader decodes
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    /// POINT entity
    Point(Point),
    /// POLYLINE entity with its VERTEX chain
    Polyline(Polyline),
}

impl EntityType {
    /// Entity type tags the reader accepts
    pub const SUPPORTED_TAGS: [&'static str; 2] = ["POINT", "POLYLINE"];

    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Polyline(e) => e,
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            EntityType::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            EntityType::Polyline(p) => Some(p),
            _ => None,
        }
    }

    pub fn common(&self) -> &EntityCommon {
        match self {
            EntityType::Point(e) => &e.common,
            EntityType::Polyline(e) => &e.common,
        }
    }
}

impl From<Point> for EntityType {
    fn from(point: Point) -> Self {
        EntityType::Point(point)
    }
}

impl From<Polyline> for EntityType {
    fn from(polyline: Polyline) -> Self {
        EntityType::Polyline(polyline)
    }
}
