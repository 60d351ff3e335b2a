use std::fs;
use std::path::Path;

use super::model::MapDocument;
use crate::error::{MapCleanError, Result};

/// Encode a document as compact JSON.
pub fn map_to_string(document: &MapDocument) -> Result<String> {
    serde_json::to_string(document).map_err(MapCleanError::Serialize)
}

/// Public API: write a document to disk as compact UTF-8 JSON.
///
/// The document is encoded in full before the file is touched; a failed
/// write may still leave a truncated file behind.
pub fn save_map_to_file(document: &MapDocument, path: &Path) -> Result<()> {
    let encoded = map_to_string(document)?;
    fs::write(path, encoded).map_err(|source| MapCleanError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "wrote map document");
    Ok(())
}
