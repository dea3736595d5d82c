//! DXF (Drawing Exchange Format) reading

mod batch;
pub mod code_page;
mod reader;

pub use batch::{read_files, read_files_with};
pub use code_page::{resolve_code_page, CodePage};
pub use reader::{DxfReader, DxfReaderConfiguration, LineSource, TokenStream, DEFAULT_CHUNK_SIZE};
