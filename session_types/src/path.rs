//! Document path identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an open document
///
/// The path is the registry key for a document and does not change for the
/// document's lifetime. Two open documents never share a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentPath(String);

impl DocumentPath {
    /// Creates a document path
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the final path segment, if any
    ///
    /// Used for tab labels. A trailing separator yields `None`.
    pub fn file_name(&self) -> Option<&str> {
        self.0
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }

    /// Returns the extension of the final path segment, if any
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Some(ext)
    }
}

impl From<&str> for DocumentPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
