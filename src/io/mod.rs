//! I/O module for reading ASCII DXF files

pub mod dxf;

pub use dxf::{read_files, DxfReader, DxfReaderConfiguration};
