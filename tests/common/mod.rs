//! Shared test utilities for ggdxf integration tests.
//!
//! Builders for DXF text plus read helpers, imported by every test crate
//! via `mod common;`.

#![allow(dead_code)]

pub mod builders;

pub use builders::{document_with, DxfBuilder};

use ggdxf::io::dxf::{DxfReader, DxfReaderConfiguration};
use ggdxf::{DxfDocument, DxfError};
use std::path::PathBuf;

/// Read DXF text with the default configuration
pub fn read_str(content: &str) -> Result<DxfDocument, DxfError> {
    DxfReader::from_bytes(content.as_bytes().to_vec()).read()
}

/// Read DXF text with a specific chunk size
pub fn read_with_chunk_size(content: &str, chunk_size: usize) -> Result<DxfDocument, DxfError> {
    let config = DxfReaderConfiguration {
        chunk_size,
        ..Default::default()
    };
    DxfReader::from_bytes(content.as_bytes().to_vec())
        .with_configuration(config)
        .read()
}

/// Resolve path into the `test_output/` directory, creating it if needed.
pub fn test_output_path(filename: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    let _ = std::fs::create_dir_all(&dir);
    dir.join(filename)
}
