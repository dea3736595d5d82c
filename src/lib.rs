//! # ggdxf
//!
//! A reader for ASCII DXF drawings that pulls out the parts needed to show
//! survey data on a map: header variables, symbol tables, points and
//! polylines.
//!
//! ## Features
//!
//! - Streaming line reader with chunked input (lines may span chunks)
//! - Recursive-descent parsing of the HEADER, TABLES, BLOCKS and ENTITIES
//!   sections with typed errors carrying the offending line
//! - POINT and POLYLINE entities (with their VERTEX chains)
//! - `$DWGCODEPAGE` aware decoding of pre-2007 drawings
//! - Swiss CH1903 to WGS84 projection of entity coordinates
//! - Parallel reading of many files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ggdxf::{geo::{project_polyline, Ch1903}, DxfReader};
//!
//! let doc = DxfReader::from_file("parcels.dxf")?.read()?;
//!
//! for polyline in doc.polylines() {
//!     let outline = project_polyline(polyline, &Ch1903);
//!     println!("{}: {} vertices", polyline.common.layer, outline.len());
//! }
//! # Ok::<(), ggdxf::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `LineSource` - chunked byte stream to trimmed text lines
//! - `TokenStream` - line tokens with LIFO pushback and `expect`
//! - `SectionReader` - one parsing routine per grammar construct
//! - `DxfDocument` - header, tables and entities of one file
//!
//! Reading is all-or-nothing: the first grammar violation aborts the read
//! with a [`DxfError`]. Non-fatal observations end up in
//! [`DxfDocument::notifications`].

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod geo;
pub mod io;
pub mod notification;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Attributes, BoundingBox2D, Vector2, Vector3};

// Re-export entity types
pub use entities::{Entity, EntityType, Point, Polyline, PolylineFlags, Vertex};

// Re-export table types
pub use tables::{Table, TableEntry, TableEntryFlags};

// Re-export document
pub use document::{DxfDocument, Header};

// Re-export I/O types
pub use io::dxf::{read_files, DxfReader, DxfReaderConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_creation() {
        let doc = DxfDocument::new();
        assert!(doc.entities.is_empty());
        assert!(doc.header.version().is_none());
    }
}
