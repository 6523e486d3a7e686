use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// Read a JSON file and deserialize it into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| CoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove `dir` recursively if it exists, then create `dir/deepest_subdir`.
pub fn reset_directory(dir: &Path, deepest_subdir: &str) -> Result<(), CoreError> {
    if dir.exists() {
        std::fs::remove_dir_all(dir).map_err(|e| CoreError::io(dir, e))?;
    }
    let leaf = dir.join(deepest_subdir);
    std::fs::create_dir_all(&leaf).map_err(|e| CoreError::io(&leaf, e))?;
    Ok(())
}

/// Append `content` to `path`, creating the file and its parents if missing.
pub fn append_to_file(path: &Path, content: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CoreError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| CoreError::io(path, e))?;
    Ok(())
}
