use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::storage::ContentSink;

/// Output text accumulated per destination file.
///
/// Destinations keep the order in which they were first touched, and
/// fragments keep the order in which they were appended. Flushing consumes
/// the accumulator, so each destination reaches the sink at most once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContentBuffers {
    buffers: IndexMap<PathBuf, String>,
}

impl ContentBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fragment` to `dest`, creating an empty buffer first if needed.
    pub fn append(&mut self, dest: impl Into<PathBuf>, fragment: &str) {
        self.buffers.entry(dest.into()).or_default().push_str(fragment);
    }

    /// Seed `dest` with `header` if it has never been seen.
    ///
    /// Returns `true` when the buffer was created by this call.
    pub fn init_once(&mut self, dest: impl Into<PathBuf>, header: &str) -> bool {
        let dest = dest.into();
        if self.buffers.contains_key(&dest) {
            return false;
        }
        self.buffers.insert(dest, header.to_string());
        true
    }

    pub fn get(&self, dest: &Path) -> Option<&str> {
        self.buffers.get(dest).map(String::as_str)
    }

    pub fn contains(&self, dest: &Path) -> bool {
        self.buffers.contains_key(dest)
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.buffers.iter().map(|(p, c)| (p.as_path(), c.as_str()))
    }

    /// Merge another accumulator into this one, appending where destinations overlap.
    pub fn extend(&mut self, other: ContentBuffers) {
        for (dest, content) in other.buffers {
            self.append(dest, &content);
        }
    }

    /// Hand every buffer to `sink` in insertion order. Returns the number of
    /// destinations written.
    pub fn flush<S: ContentSink + ?Sized>(self, sink: &mut S) -> Result<usize, CoreError> {
        let count = self.buffers.len();
        for (dest, content) in self.buffers {
            tracing::debug!(path = %dest.display(), bytes = content.len(), "flushing buffer");
            sink.append(&dest, &content)?;
        }
        Ok(count)
    }
}
