//! # Tab Tracker Service
//!
//! This crate enforces the single-active-document invariant and decides
//! which neighbor takes over when the active tab closes.
//!
//! ## Philosophy
//!
//! - **Explicit activation**: Activation is requested, never ambient.
//! - **At most one active**: Every activation first deactivates the rest.
//! - **Deterministic succession**: The replacement for a closing tab is a
//!   pure function of pre-removal positions.
//! - **Auditable**: Every transition is recorded.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A tab strip renderer (no geometry, no scrolling, only a hint)
//! - A focus router for input events
//! - An owner of documents (it operates on the registry it is handed)

use serde::{Deserialize, Serialize};
use services_document_registry::DocumentRegistry;
use session_types::DocumentPath;
use surface_api::TabScrollSink;
use thiserror::Error;

/// Tab tracker error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    /// Activation referenced a path not present in the registry
    #[error("Document not found: {0}")]
    NotFound(DocumentPath),
}

/// Tab transition event for the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabEvent {
    /// A document became the active one
    Activated {
        /// Path of the newly active document
        path: DocumentPath,
        /// Sequence number of the transition
        seq: u64,
    },
    /// Every document was deactivated
    AllDeactivated {
        /// Sequence number of the transition
        seq: u64,
    },
    /// A replacement was selected for a closing tab
    ReplacementPicked {
        /// Path of the closing document
        closing: DocumentPath,
        /// Selected successor, if the registry keeps any documents
        replacement: Option<DocumentPath>,
        /// Sequence number of the transition
        seq: u64,
    },
}

/// Tab tracker
///
/// Stateless with respect to documents (the active flag lives on the
/// document) but keeps an audit trail of transitions.
#[derive(Debug, Default)]
pub struct TabTracker {
    /// Audit trail of tab transitions
    audit_trail: Vec<TabEvent>,
    /// Next transition sequence number
    next_seq: u64,
}

impl TabTracker {
    /// Creates a tab tracker
    pub fn new() -> Self {
        Self {
            audit_trail: Vec::new(),
            next_seq: 0,
        }
    }

    /// Makes `path` the single active document
    ///
    /// Deactivates every other document first, then raises a best-effort
    /// scroll-into-view hint for the tab strip.
    pub fn activate(
        &mut self,
        registry: &mut DocumentRegistry,
        path: &DocumentPath,
        scroll: &mut dyn TabScrollSink,
    ) -> Result<(), TabError> {
        if registry.find_by_path(path).is_none() {
            return Err(TabError::NotFound(path.clone()));
        }

        for document in registry.iter_mut() {
            document.active = false;
        }
        if let Some(document) = registry.find_by_path_mut(path) {
            document.active = true;
        }

        let seq = self.next_seq();
        self.audit_trail.push(TabEvent::Activated {
            path: path.clone(),
            seq,
        });

        scroll.notify_tab_scroll_needed();
        Ok(())
    }

    /// Clears the active flag on every document
    pub fn deactivate_all(&mut self, registry: &mut DocumentRegistry) {
        for document in registry.iter_mut() {
            document.active = false;
        }
        let seq = self.next_seq();
        self.audit_trail.push(TabEvent::AllDeactivated { seq });
    }

    /// Selects the document that takes over when the tab at
    /// `closing_index` closes
    ///
    /// Must be called before the document is removed: the selection is
    /// computed from pre-removal positions. The right neighbor wins; the
    /// left neighbor wins when the closing tab is last; `None` when the
    /// registry is about to become empty.
    pub fn pick_replacement_on_close(
        &mut self,
        registry: &DocumentRegistry,
        closing_index: usize,
    ) -> Option<DocumentPath> {
        let closing = match registry.get(closing_index) {
            Some(document) => document.path().clone(),
            None => return None,
        };

        let replacement = if closing_index + 1 < registry.len() {
            registry.get(closing_index + 1)
        } else if closing_index > 0 {
            registry.get(closing_index - 1)
        } else {
            None
        }
        .map(|doc| doc.path().clone());
        let seq = self.next_seq();
        self.audit_trail.push(TabEvent::ReplacementPicked {
            closing,
            replacement: replacement.clone(),
            seq,
        });

        replacement
    }

    /// Returns the audit trail
    pub fn audit_trail(&self) -> &[TabEvent] {
        &self.audit_trail
    }

    /// Gets the next sequence number and increments the counter
    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services_document_registry::Document;
    use session_types::DisplayOptions;

    struct CountingSink {
        hints: usize,
    }

    impl TabScrollSink for CountingSink {
        fn notify_tab_scroll_needed(&mut self) {
            self.hints += 1;
        }
    }

    fn registry_with(paths: &[&str]) -> DocumentRegistry {
        let mut registry = DocumentRegistry::new();
        // Insert in reverse so display order matches the slice
        for path in paths.iter().rev() {
            registry
                .insert_after_active(Document::new(
                    DocumentPath::new(*path),
                    "content",
                    DisplayOptions::with_mode("text"),
                ))
                .unwrap();
        }
        registry
    }

    fn active_paths(registry: &DocumentRegistry) -> Vec<String> {
        registry
            .iter()
            .filter(|d| d.active)
            .map(|d| d.path().as_str().to_string())
            .collect()
    }

    #[test]
    fn test_activate_sets_single_active() {
        let mut registry = registry_with(&["/a", "/b", "/c"]);
        let mut tracker = TabTracker::new();
        let mut sink = CountingSink { hints: 0 };

        tracker
            .activate(&mut registry, &DocumentPath::new("/b"), &mut sink)
            .unwrap();
        assert_eq!(active_paths(&registry), vec!["/b"]);

        tracker
            .activate(&mut registry, &DocumentPath::new("/c"), &mut sink)
            .unwrap();
        assert_eq!(active_paths(&registry), vec!["/c"]);
        assert_eq!(sink.hints, 2);
    }

    #[test]
    fn test_activate_unknown_path_fails() {
        let mut registry = registry_with(&["/a"]);
        let mut tracker = TabTracker::new();
        let mut sink = CountingSink { hints: 0 };

        let result = tracker.activate(&mut registry, &DocumentPath::new("/missing"), &mut sink);
        assert_eq!(result, Err(TabError::NotFound(DocumentPath::new("/missing"))));
        assert_eq!(sink.hints, 0);
    }

    #[test]
    fn test_deactivate_all() {
        let mut registry = registry_with(&["/a", "/b"]);
        let mut tracker = TabTracker::new();
        let mut sink = CountingSink { hints: 0 };

        tracker
            .activate(&mut registry, &DocumentPath::new("/a"), &mut sink)
            .unwrap();
        tracker.deactivate_all(&mut registry);
        assert!(active_paths(&registry).is_empty());
    }

    #[test]
    fn test_replacement_prefers_right_neighbor() {
        let mut tracker = TabTracker::new();
        let registry = registry_with(&["/a", "/b", "/c"]);
        let replacement = tracker.pick_replacement_on_close(&registry, 1);
        assert_eq!(replacement, Some(DocumentPath::new("/c")));
    }

    #[test]
    fn test_replacement_falls_back_left_at_end() {
        let mut tracker = TabTracker::new();
        let registry = registry_with(&["/a", "/b"]);
        let replacement = tracker.pick_replacement_on_close(&registry, 1);
        assert_eq!(replacement, Some(DocumentPath::new("/a")));
    }

    #[test]
    fn test_replacement_none_for_last_document() {
        let mut tracker = TabTracker::new();
        let registry = registry_with(&["/a"]);
        let replacement = tracker.pick_replacement_on_close(&registry, 0);
        assert_eq!(replacement, None);
    }

    #[test]
    fn test_audit_trail_sequences() {
        let mut registry = registry_with(&["/a", "/b"]);
        let mut tracker = TabTracker::new();
        let mut sink = CountingSink { hints: 0 };

        tracker
            .activate(&mut registry, &DocumentPath::new("/a"), &mut sink)
            .unwrap();
        tracker.deactivate_all(&mut registry);

        let trail = tracker.audit_trail();
        assert_eq!(trail.len(), 2);
        match (&trail[0], &trail[1]) {
            (TabEvent::Activated { seq: s0, .. }, TabEvent::AllDeactivated { seq: s1 }) => {
                assert!(s1 > s0);
            }
            other => panic!("Unexpected trail: {:?}", other),
        }
    }

    #[test]
    fn test_tab_event_serde_roundtrip() {
        let event = TabEvent::ReplacementPicked {
            closing: DocumentPath::new("/a"),
            replacement: Some(DocumentPath::new("/b")),
            seq: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: TabEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
