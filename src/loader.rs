use serde_json::Value;
use tracing::debug;

use std::{fs, io::ErrorKind, path::Path};

use crate::error::{Error, Input, Result};

/// Reads the file at `path` and decodes it as JSON.
///
/// The document may have any shape; use [`into_list`] to require a top-level
/// array.
///
/// # Errors
///
/// Returns errors if:
/// * The file does not exist
/// * The file cannot be read as UTF-8 text
/// * The contents are not valid JSON
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let value = serde_json::from_str(&text).map_err(|source| Error::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded");
    Ok(value)
}

/// Returns the elements of `value` if it is a JSON array.
///
/// # Errors
///
/// Returns [`Error::NotAList`], naming `input`, for any other kind of value.
pub fn into_list(value: Value, input: Input) -> Result<Vec<Value>> {
    match value {
        Value::Array(rows) => Ok(rows),
        _ => Err(Error::NotAList(input)),
    }
}
