//! Value types shared across the document model

pub mod bounds;
pub mod vector;

pub use bounds::BoundingBox2D;
pub use vector::{Vector2, Vector3};

use indexmap::IndexMap;

/// Free-form group code → value pairs attached to entries, entities and
/// vertices, in file order. A repeated code overwrites the earlier value
/// without moving it.
pub type Attributes = IndexMap<String, String>;
