//! Parallel reading of many DXF files
//!
//! Each file gets its own reader and token stream; nothing is shared
//! between parses, so one malformed file never affects the others.

use super::reader::{DxfReader, DxfReaderConfiguration};
use crate::document::DxfDocument;
use crate::error::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Read every file in `paths` with the default configuration
///
/// Results come back in input order, paired with their path.
pub fn read_files<P>(paths: &[P]) -> Vec<(PathBuf, Result<DxfDocument>)>
where
    P: AsRef<Path> + Sync,
{
    read_files_with(paths, &DxfReaderConfiguration::default())
}

/// Read every file in `paths` with an explicit configuration
pub fn read_files_with<P>(
    paths: &[P],
    config: &DxfReaderConfiguration,
) -> Vec<(PathBuf, Result<DxfDocument>)>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = DxfReader::from_file(path)
                .and_then(|reader| reader.with_configuration(config.clone()).read());
            (path.to_path_buf(), result)
        })
        .collect()
}
