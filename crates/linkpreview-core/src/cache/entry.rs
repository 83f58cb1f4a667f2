//! Read and write cache entries (one JSON file per URL).

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{PreviewError, Result};
use crate::preview::LinkPreview;

/// Load the entry at `path`. A missing file is `Ok(None)`; an unreadable or
/// corrupt one is an error, never a silent miss.
pub(crate) fn read_entry(path: &Path) -> Result<Option<LinkPreview>> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PreviewError::CacheIo {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let preview = serde_json::from_slice(&bytes).map_err(|source| PreviewError::CacheRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(preview))
}

/// Write `preview` to `path` via a temp file in `dir` and an atomic rename,
/// replacing any existing entry.
pub(crate) fn write_entry(dir: &Path, path: &Path, preview: &LinkPreview) -> Result<()> {
    let io_err = |source: std::io::Error| PreviewError::CacheIo {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    serde_json::to_writer(&mut tmp, preview).map_err(|e| io_err(e.into()))?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
