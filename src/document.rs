//! DXF document structure

use crate::entities::{Entity, EntityType, Point, Polyline};
use crate::notification::NotificationCollection;
use crate::tables::Table;
use crate::types::BoundingBox2D;
use ahash::AHashMap;
use indexmap::IndexMap;

/// HEADER section variables, kept as raw strings
///
/// Names include the leading `$` (e.g. `$ACADVER`). A variable made of
/// several groups, such as the point `$EXTMIN`, stores its values joined
/// with `,` in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    variables: IndexMap<String, String>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any earlier value in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Append one more group value to a variable
    pub fn append(&mut self, name: &str, value: &str) {
        match self.variables.get_mut(name) {
            Some(existing) => {
                existing.push(',');
                existing.push_str(value);
            }
            None => {
                self.variables.insert(name.to_string(), value.to_string());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Drawing version string, e.g. `AC1009`
    pub fn version(&self) -> Option<&str> {
        self.get("$ACADVER")
    }

    /// Drawing code page, e.g. `ANSI_1252`
    pub fn code_page(&self) -> Option<&str> {
        self.get("$DWGCODEPAGE")
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The result of reading one DXF file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DxfDocument {
    /// HEADER variables
    pub header: Header,
    /// Tables in declaration order
    pub tables: Vec<Table>,
    /// Entities in file order
    pub entities: Vec<EntityType>,
    /// Non-fatal observations made while reading
    pub notifications: NotificationCollection,
}

impl DxfDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over all entities
    pub fn entities(&self) -> std::slice::Iter<'_, EntityType> {
        self.entities.iter()
    }

    /// Entity at a file-order index
    pub fn entity(&self, index: usize) -> Option<&EntityType> {
        self.entities.get(index)
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.entities.iter().filter_map(EntityType::as_point)
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.entities.iter().filter_map(EntityType::as_polyline)
    }

    /// Entities on a layer, in file order
    pub fn entities_on_layer<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a EntityType> {
        self.entities
            .iter()
            .filter(move |e| e.as_entity().layer() == layer)
    }

    /// Index of entity positions by layer name
    pub fn layer_index(&self) -> AHashMap<&str, Vec<usize>> {
        let mut index: AHashMap<&str, Vec<usize>> = AHashMap::new();
        for (i, entity) in self.entities.iter().enumerate() {
            index.entry(entity.as_entity().layer()).or_default().push(i);
        }
        index
    }

    /// Table by name (case-insensitive)
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The LAYER table, when present
    pub fn layers(&self) -> Option<&Table> {
        self.table("LAYER")
    }

    /// Planar extents of every entity with coordinates
    pub fn extents(&self) -> Option<BoundingBox2D> {
        self.entities
            .iter()
            .filter_map(|e| e.as_entity().bounding_box())
            .reduce(|a, b| a.merge(&b))
    }
}
