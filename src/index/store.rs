// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing the index file.
//!
//! The file is pretty-printed JSON with a trailing newline, so it diffs
//! cleanly in git. Writes go through a temporary file in the same directory
//! and an atomic rename: a reader either sees the previous index or the new
//! one, never half of either.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::IndexCollection;
use crate::error::{Error, Result};

/// Serialize as a pretty JSON array (2-space indent) with a trailing newline.
pub fn to_json_pretty(collection: &IndexCollection) -> Result<String> {
    let mut json = serde_json::to_string_pretty(collection)
        .map_err(|e| Error::json("<index>", e))?;
    json.push('\n');
    Ok(json)
}

/// Parse an index from JSON text. Unknown record fields are ignored.
///
/// Records are taken in file order; they are not re-sorted.
pub fn from_json(json: &str) -> std::result::Result<IndexCollection, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load an index file.
pub fn load(path: &Path) -> Result<IndexCollection> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    from_json(&content).map_err(|e| Error::json(path, e))
}

/// Replace `path` with `bytes` atomically.
///
/// Creates the parent directory if needed. On failure the temporary file is
/// removed and whatever was at `path` before is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    tmp.write_all(bytes).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Serialize `collection` and atomically write it to `path`. Returns the bytes written.
pub fn save(collection: &IndexCollection, path: &Path) -> Result<Vec<u8>> {
    let json = to_json_pretty(collection)?;
    let bytes = json.into_bytes();
    write_atomic(path, &bytes)?;
    Ok(bytes)
}

/// An index file as the browser receives it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub collection: IndexCollection,
    pub raw_bytes: usize,
    /// Size after brotli at the quality static hosts serve with.
    pub brotli_bytes: usize,
    pub crc32: u32,
}

/// Brotli-compressed size of `data` (quality 11, 4 MiB window).
pub fn brotli_size(data: &[u8]) -> usize {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        // Writing into a Vec cannot fail
        let _ = encoder.write_all(data);
    }
    compressed.len()
}

/// Load an index file and measure it.
pub fn inspect(path: &Path) -> Result<FileSummary> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let collection: IndexCollection =
        serde_json::from_slice(&bytes).map_err(|e| Error::json(path, e))?;
    Ok(FileSummary {
        collection,
        raw_bytes: bytes.len(),
        brotli_bytes: brotli_size(&bytes),
        crc32: crc32fast::hash(&bytes),
    })
}
