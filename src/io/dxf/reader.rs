//! DXF file reader

mod line_source;
mod section_reader;
mod token_stream;

pub use line_source::{LineSource, DEFAULT_CHUNK_SIZE};
pub use token_stream::TokenStream;

use section_reader::SectionReader;

use crate::document::DxfDocument;
use crate::error::Result;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Configuration for the DXF reader.
#[derive(Debug, Clone)]
pub struct DxfReaderConfiguration {
    /// Bytes requested from the input per read.
    ///
    /// Default: 4096.
    pub chunk_size: usize,

    /// When `true`, input that ends after the ENTITIES section without a
    /// `0 EOF` marker is an error.
    ///
    /// Default: `false`.
    pub require_eof: bool,

    /// Encoding for lines that are not valid UTF-8, used until the HEADER
    /// names a code page. `None` decodes such lines as Latin-1.
    pub fallback_encoding: Option<&'static Encoding>,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            require_eof: false,
            fallback_encoding: None,
        }
    }
}

/// DXF file reader
///
/// Reads the four sections HEADER, TABLES, BLOCKS and ENTITIES, in that
/// order, and returns the decoded [`DxfDocument`]. Any grammar violation
/// aborts the read.
pub struct DxfReader {
    reader: Box<dyn Read>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(reader),
            config: DxfReaderConfiguration::default(),
        }
    }

    /// Create a new DXF reader over in-memory content
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::from_reader(Cursor::new(data.into()))
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Read the whole input and return a DxfDocument
    pub fn read(self) -> Result<DxfDocument> {
        let mut source = LineSource::with_chunk_size(self.reader, self.config.chunk_size);
        if let Some(encoding) = self.config.fallback_encoding {
            source.set_encoding(encoding);
        }
        let mut stream = TokenStream::new(source);
        let mut sections = SectionReader::new(&mut stream);

        let mut document = DxfDocument::new();
        sections.read_header(&mut document)?;
        sections.apply_code_page(&mut document);
        sections.read_tables(&mut document)?;
        sections.skip_blocks(&mut document)?;
        sections.read_entities(&mut document)?;
        sections.read_trailer(&mut document, self.config.require_eof)?;

        Ok(document)
    }
}
