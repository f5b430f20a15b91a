//! The open-document entity

use session_types::{DisplayOptions, DocumentPath};
use surface_api::{SubscriptionHandle, TaskHandle};

/// One open editable unit, identified by path
///
/// A document owns at most one live debounce-timer handle and at most one
/// change subscription. The timer handle doubles as the dirty flag: it is
/// present exactly when the document has unsaved changes that have not been
/// flushed.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Registry key; stable for the document's lifetime
    path: DocumentPath,
    /// Current in-memory text value
    pub content: String,
    /// Whether this document is the one presented in the editing surface
    pub active: bool,
    /// Presentation metadata resolved once at creation
    display: DisplayOptions,
    /// Handle of the scheduled-but-not-fired save, if any
    pub pending_save: Option<TaskHandle>,
    /// Handle of the live change subscription, if any
    pub subscription: Option<SubscriptionHandle>,
}

impl Document {
    /// Creates a document with content and display options captured at
    /// open time
    ///
    /// New documents start inactive, clean, and unwatched.
    pub fn new(path: DocumentPath, content: impl Into<String>, display: DisplayOptions) -> Self {
        Self {
            path,
            content: content.into(),
            active: false,
            display,
            pending_save: None,
            subscription: None,
        }
    }

    /// Returns the document's path
    pub fn path(&self) -> &DocumentPath {
        &self.path
    }

    /// Returns the presentation options resolved at creation
    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Whether the document has unsaved changes pending a flush
    ///
    /// Drives the unsaved-changes indicator on the tab.
    pub fn is_dirty(&self) -> bool {
        self.pending_save.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_api::TaskHandle;

    fn doc(path: &str) -> Document {
        Document::new(
            DocumentPath::new(path),
            "content",
            DisplayOptions::with_mode("text"),
        )
    }

    #[test]
    fn test_new_document_is_inactive_and_clean() {
        let document = doc("/a.txt");
        assert!(!document.active);
        assert!(!document.is_dirty());
        assert!(document.subscription.is_none());
    }

    #[test]
    fn test_dirty_tracks_pending_save() {
        let mut document = doc("/a.txt");
        document.pending_save = Some(TaskHandle::new());
        assert!(document.is_dirty());

        document.pending_save = None;
        assert!(!document.is_dirty());
    }

    #[test]
    fn test_display_options_captured_at_creation() {
        let document = Document::new(
            DocumentPath::new("/a.rs"),
            "fn main() {}",
            DisplayOptions::with_mode("rust"),
        );
        assert_eq!(document.display().mode, "rust");
    }
}
