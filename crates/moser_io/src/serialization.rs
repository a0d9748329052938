//! Serialization utilities with robust error handling.
//!
//! JSON helpers shared by the ruleset store and the binary.

use crate::error::{IoError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Deserializes data from JSON string.
///
/// # Returns
/// Deserialized data on success, or `IoError::Validation` for blank input.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {}", e)))
}

/// Writes pretty JSON through a `.tmp` sibling, then renames it into place.
///
/// Readers never observe a half-written file.
pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            IoError::FileSystem(e).with_context(format!("creating directory {:?}", parent))
        })?;
    }

    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path).map_err(|e| {
            IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", tmp_path))
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, data)?;
    }
    std::fs::rename(&tmp_path, path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("replacing {:?}", path))
    })?;
    Ok(())
}

/// Reads JSON from a file.
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path.as_ref()))
    })?;
    from_json(&json)
}
