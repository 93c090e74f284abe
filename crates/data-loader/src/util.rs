use crate::error::LoadError;
use serde_json::Value;
use std::{fs, path::Path};

/// Reads a JSON document from disk
pub(crate) fn read_document(path: &Path) -> Result<Value, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
