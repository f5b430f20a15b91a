//! Ordered registry of open documents with path lookup

use session_types::DocumentPath;
use std::collections::HashMap;
use thiserror::Error;

use crate::document::Document;

/// Registry error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Operation referenced a path not present in the registry
    #[error("Document not found: {0}")]
    NotFound(DocumentPath),

    /// Insertion would register a path twice
    #[error("Document already open: {0}")]
    DuplicatePath(DocumentPath),
}

/// The authoritative collection of open documents
///
/// Maintains two synchronized views: a vector in display order (tab order)
/// and a path-to-position map for O(1) expected lookup. Every mutation goes
/// through methods that keep both views consistent; the map is never
/// exposed.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    /// Documents in display order
    order: Vec<Document>,
    /// Path -> position in `order`
    positions: HashMap<DocumentPath, usize>,
}

impl DocumentRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Number of open documents
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no documents are open
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up a document by path
    pub fn find_by_path(&self, path: &DocumentPath) -> Option<&Document> {
        self.positions.get(path).map(|&pos| &self.order[pos])
    }

    /// Looks up a document by path, mutably
    pub fn find_by_path_mut(&mut self, path: &DocumentPath) -> Option<&mut Document> {
        match self.positions.get(path) {
            Some(&pos) => Some(&mut self.order[pos]),
            None => None,
        }
    }

    /// Returns the display-order position of `path`, if open
    pub fn index_of(&self, path: &DocumentPath) -> Option<usize> {
        self.positions.get(path).copied()
    }

    /// Returns the document at a display-order position
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.order.get(index)
    }

    /// Returns the display-order position of the active document, if any
    pub fn active_index(&self) -> Option<usize> {
        self.order.iter().position(|doc| doc.active)
    }

    /// Inserts a document immediately after the active one
    ///
    /// New tabs open next to the current one. With no active document the
    /// new entry goes to position 0. Returns the insertion position.
    pub fn insert_after_active(&mut self, document: Document) -> Result<usize, RegistryError> {
        if self.positions.contains_key(document.path()) {
            return Err(RegistryError::DuplicatePath(document.path().clone()));
        }

        let position = match self.active_index() {
            Some(active) => active + 1,
            None => 0,
        };

        self.positions.insert(document.path().clone(), position);
        self.order.insert(position, document);
        self.reindex_from(position + 1);

        Ok(position)
    }

    /// Removes a document by path
    ///
    /// Returns the removed document so close-time teardown can use state
    /// captured before removal.
    pub fn remove(&mut self, path: &DocumentPath) -> Result<Document, RegistryError> {
        let position = self
            .positions
            .remove(path)
            .ok_or_else(|| RegistryError::NotFound(path.clone()))?;

        let document = self.order.remove(position);
        self.reindex_from(position);

        Ok(document)
    }

    /// Iterates documents in display order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.order.iter()
    }

    /// Iterates documents in display order, mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Document> {
        self.order.iter_mut()
    }

    /// Rewrites map positions for entries at or after `from`
    fn reindex_from(&mut self, from: usize) {
        for (pos, document) in self.order.iter().enumerate().skip(from) {
            self.positions.insert(document.path().clone(), pos);
        }
    }
}
