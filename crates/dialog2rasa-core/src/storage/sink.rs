use std::path::Path;

use crate::error::CoreError;

use super::fs::append_to_file;

/// Destination for flushed output buffers.
pub trait ContentSink {
    /// Append `content` to whatever lives at `path`.
    fn append(&mut self, path: &Path, content: &str) -> Result<(), CoreError>;
}

/// Writes buffers straight to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl ContentSink for FsSink {
    fn append(&mut self, path: &Path, content: &str) -> Result<(), CoreError> {
        append_to_file(path, content)
    }
}
