//! Reading documents from disk

use crate::core::SplitDocument;
use crate::error::{MatterFmtError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a file as lines, with `\n` / `\r\n` terminators removed
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MatterFmtError::file_not_found(path),
        _ => MatterFmtError::read(path, e),
    })?;

    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| MatterFmtError::read(path, e))
}

/// Read and split a document, reporting parse errors against `path`
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<SplitDocument> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    SplitDocument::split(lines).map_err(|e| e.with_path(path))
}
