//! Extension-table mode resolver

use session_types::{DisplayOptions, DocumentPath};
use std::collections::HashMap;
use surface_api::ModeResolver;

/// Mode resolver backed by a file-extension table
///
/// Pure function of the path: unknown extensions (and paths without one)
/// resolve to plain text.
#[derive(Debug, Clone)]
pub struct SimModeResolver {
    modes: HashMap<String, String>,
}

impl SimModeResolver {
    /// Creates a resolver with a small default table
    pub fn new() -> Self {
        let mut modes = HashMap::new();
        for (ext, mode) in [
            ("rs", "rust"),
            ("js", "javascript"),
            ("md", "markdown"),
            ("json", "json"),
            ("toml", "toml"),
            ("txt", "text"),
        ] {
            modes.insert(ext.to_string(), mode.to_string());
        }
        Self { modes }
    }

    /// Adds or overrides one extension mapping
    pub fn with_mapping(mut self, extension: impl Into<String>, mode: impl Into<String>) -> Self {
        self.modes.insert(extension.into(), mode.into());
        self
    }
}

impl Default for SimModeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeResolver for SimModeResolver {
    fn resolve(&self, path: &DocumentPath) -> DisplayOptions {
        let mode = path
            .extension()
            .and_then(|ext| self.modes.get(ext))
            .map(String::as_str)
            .unwrap_or("text");
        DisplayOptions::with_mode(mode)
    }
}
