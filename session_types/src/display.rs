//! Presentation metadata for an open document

use serde::{Deserialize, Serialize};

/// Presentation options resolved once when a document is opened
///
/// The editing surface consumes these verbatim; the session core never
/// mutates them after creation. Mode resolution is the mode resolver
/// collaborator's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Editing mode identifier (e.g. highlighting mode)
    pub mode: String,
    /// Surface theme identifier
    pub theme: String,
}

impl DisplayOptions {
    /// Theme applied to every document unless a resolver overrides it
    pub const DEFAULT_THEME: &'static str = "merbivore_soft";

    /// Creates display options with the default theme
    pub fn with_mode(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            theme: Self::DEFAULT_THEME.to_string(),
        }
    }

    /// Creates display options with an explicit theme
    pub fn new(mode: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            theme: theme.into(),
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::with_mode("text")
    }
}
