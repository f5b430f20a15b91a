//! # Editor Session Service
//!
//! This crate orchestrates the open-document lifecycle: opening, switching,
//! editing, and closing tabs in response to boundary events.
//!
//! ## Philosophy
//!
//! - **One event loop**: Every state transition happens on the caller's
//!   logical event loop. Asynchronous completions (fetched content, elapsed
//!   timers, observed edits) re-enter through explicit methods, serialized
//!   with everything else.
//! - **Single owner**: The session owns the registry; the tab tracker and
//!   save scheduler only ever see what they are handed.
//! - **Collaborators behind seams**: Storage, timers, subscriptions, mode
//!   resolution, and scrolling are trait objects injected at session start.
//! - **Auditable**: Lifecycle decisions are recorded as typed events.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A text widget (content is an opaque value)
//! - A persistence layer (saves are fire-and-forget requests)
//! - A renderer (it exposes a read view; drawing is the surface's job)

use serde::{Deserialize, Serialize};
use services_document_registry::{Document, DocumentRegistry, RegistryError};
use services_save_scheduler::SaveScheduler;
use services_tab_tracker::{TabError, TabEvent, TabTracker};
use session_types::{DisplayOptions, DocumentPath};
use surface_api::{
    ChangeNotifier, DeferredTask, DeferredTaskScheduler, ElapsedTask, FetchError, ModeResolver,
    PersistenceGateway, SubscriptionError, TabScrollSink,
};
use thiserror::Error;

/// Session error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Content request failed; no document was created
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Change-subscription wiring failed; fatal to the operation
    #[error("Subscription failed: {0}")]
    Subscription(#[from] SubscriptionError),

    /// Operation referenced a document not present in the registry
    #[error("Document not found: {0}")]
    NotFound(DocumentPath),

    /// Registry rejected a mutation
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl From<TabError> for SessionError {
    fn from(err: TabError) -> Self {
        match err {
            TabError::NotFound(path) => SessionError::NotFound(path),
        }
    }
}

/// Session lifecycle event for the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The session started with an empty registry
    SessionStarted {
        /// Sequence number of the event
        seq: u64,
    },
    /// A document was created and registered
    DocumentOpened {
        /// Path of the new document
        path: DocumentPath,
        /// Sequence number of the event
        seq: u64,
    },
    /// A document became the active one
    DocumentActivated {
        /// Path of the activated document
        path: DocumentPath,
        /// Sequence number of the event
        seq: u64,
    },
    /// A document's content was saved by an elapsed debounce timer
    SaveFlushed {
        /// Path of the flushed document
        path: DocumentPath,
        /// Sequence number of the event
        seq: u64,
    },
    /// A document was closed and removed
    DocumentClosed {
        /// Path of the closed document
        path: DocumentPath,
        /// Sequence number of the event
        seq: u64,
    },
    /// Focus left the surface and pending saves were flushed
    FocusLostFlushed {
        /// How many documents were flushed
        flushed: usize,
        /// Sequence number of the event
        seq: u64,
    },
}

/// Read view of one tab, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    /// Document path (tab identity)
    pub path: DocumentPath,
    /// Tab label: the final path segment, or the whole path without one
    pub label: String,
    /// Whether this tab is the active one
    pub active: bool,
    /// Whether the document has unsaved changes
    pub dirty: bool,
    /// Presentation options resolved at open time
    pub display: DisplayOptions,
}

/// Editor session controller
///
/// Owns the document registry and reacts to the boundary events of the
/// editing surface: open requests, fetched content, observed edits, elapsed
/// save timers, tab closes, and focus transitions.
pub struct EditorSession {
    /// The authoritative list of open documents
    registry: DocumentRegistry,
    /// Single-active enforcement and close-time succession
    tabs: TabTracker,
    /// Per-document debounce
    saves: SaveScheduler,
    /// Deferred task scheduler collaborator
    scheduler: Box<dyn DeferredTaskScheduler>,
    /// Persistence gateway collaborator
    gateway: Box<dyn PersistenceGateway>,
    /// Change-subscription collaborator
    notifier: Box<dyn ChangeNotifier>,
    /// Mode resolver collaborator
    modes: Box<dyn ModeResolver>,
    /// Tab-scroll hint collaborator
    scroll: Box<dyn TabScrollSink>,
    /// Audit trail of session events
    audit_trail: Vec<SessionEvent>,
    /// Next event sequence number
    next_seq: u64,
}

impl EditorSession {
    /// Starts a session with an empty registry
    pub fn new(
        scheduler: Box<dyn DeferredTaskScheduler>,
        gateway: Box<dyn PersistenceGateway>,
        notifier: Box<dyn ChangeNotifier>,
        modes: Box<dyn ModeResolver>,
        scroll: Box<dyn TabScrollSink>,
    ) -> Self {
        let mut session = Self {
            registry: DocumentRegistry::new(),
            tabs: TabTracker::new(),
            saves: SaveScheduler::new(),
            scheduler,
            gateway,
            notifier,
            modes,
            scroll,
            audit_trail: Vec::new(),
            next_seq: 0,
        };
        let seq = session.next_seq();
        session.audit_trail.push(SessionEvent::SessionStarted { seq });
        session
    }

    /// Replaces the save scheduler, e.g. to shorten the quiet period
    pub fn with_save_scheduler(mut self, saves: SaveScheduler) -> Self {
        self.saves = saves;
        self
    }

    /// Handles an open-file request
    ///
    /// An already-open path is activated and nothing else happens. An
    /// unknown path triggers an asynchronous content fetch; the document is
    /// created when the content arrives. A path the gateway cannot resolve
    /// fails here and creates nothing.
    pub fn open_file(&mut self, path: &DocumentPath) -> Result<(), SessionError> {
        if self.registry.find_by_path(path).is_some() {
            return self.activate(path);
        }
        self.gateway.request_content(path)?;
        Ok(())
    }

    /// Handles fetched content for a previously requested path
    ///
    /// Creates and activates the document. If the document already exists
    /// because a duplicate open request completed first, the arrived content is
    /// discarded and the existing document is only activated, so live edits
    /// are never overwritten.
    pub fn content_arrived(
        &mut self,
        path: &DocumentPath,
        content: &str,
    ) -> Result<(), SessionError> {
        if self.registry.find_by_path(path).is_none() {
            let display = self.modes.resolve(path);
            let subscription = self.notifier.subscribe(path, content)?;
            let mut document = Document::new(path.clone(), content, display);
            document.subscription = Some(subscription);
            self.registry.insert_after_active(document)?;

            let seq = self.next_seq();
            self.audit_trail.push(SessionEvent::DocumentOpened {
                path: path.clone(),
                seq,
            });
        }
        self.activate(path)
    }

    /// Handles an observed content change
    ///
    /// Updates the in-memory value and (re-)arms the document's debounce
    /// timer. A change for an unknown path is a late delivery after
    /// teardown and is ignored.
    pub fn content_changed(&mut self, path: &DocumentPath, new_value: &str) {
        let Some(document) = self.registry.find_by_path_mut(path) else {
            return;
        };
        document.content = new_value.to_string();
        self.saves.on_content_changed(document, &mut *self.scheduler);
    }

    /// Handles an elapsed debounce timer
    ///
    /// The firing is honored only when the task's handle still matches the
    /// document's pending save; a superseded or torn-down timer firing late
    /// is dropped.
    pub fn save_timer_elapsed(&mut self, elapsed: ElapsedTask) {
        match elapsed.task {
            DeferredTask::FlushDocument(path) => {
                let Some(document) = self.registry.find_by_path_mut(&path) else {
                    return;
                };
                if document.pending_save != Some(elapsed.handle) {
                    return;
                }
                self.saves
                    .flush(document, &mut *self.scheduler, &mut *self.gateway);

                let seq = self.next_seq();
                self.audit_trail.push(SessionEvent::SaveFlushed { path, seq });
            }
        }
    }

    /// Handles a close action
    ///
    /// If the closing document is active, its replacement is selected from
    /// pre-removal positions and activated first. The document is then
    /// removed, its subscription torn down, and its content saved; always,
    /// even when it has no unsaved changes.
    pub fn close_file(&mut self, path: &DocumentPath) -> Result<(), SessionError> {
        let index = self
            .registry
            .index_of(path)
            .ok_or_else(|| SessionError::NotFound(path.clone()))?;
        let was_active = self.registry.get(index).map(|d| d.active).unwrap_or(false);

        if was_active {
            match self.tabs.pick_replacement_on_close(&self.registry, index) {
                Some(replacement) => self.activate(&replacement)?,
                None => self.tabs.deactivate_all(&mut self.registry),
            }
        }

        let mut document = self.registry.remove(path)?;
        if let Some(subscription) = document.subscription.take() {
            self.notifier.unsubscribe(subscription);
        }
        self.saves
            .flush(&mut document, &mut *self.scheduler, &mut *self.gateway);

        let seq = self.next_seq();
        self.audit_trail.push(SessionEvent::DocumentClosed {
            path: path.clone(),
            seq,
        });
        Ok(())
    }

    /// Handles the surface losing focus
    ///
    /// Flushes every document with unsaved changes so nothing is lost
    /// across the focus transition. Returns how many were flushed.
    pub fn focus_lost(&mut self) -> usize {
        let flushed = self.saves.flush_all(
            self.registry.iter_mut(),
            &mut *self.scheduler,
            &mut *self.gateway,
        );
        let seq = self.next_seq();
        self.audit_trail
            .push(SessionEvent::FocusLostFlushed { flushed, seq });
        flushed
    }

    /// Read view of every tab in display order
    pub fn tabs(&self) -> Vec<TabInfo> {
        self.registry
            .iter()
            .map(|document| TabInfo {
                path: document.path().clone(),
                label: document
                    .path()
                    .file_name()
                    .unwrap_or_else(|| document.path().as_str())
                    .to_string(),
                active: document.active,
                dirty: document.is_dirty(),
                display: document.display().clone(),
            })
            .collect()
    }

    /// Path of the active document, if any
    pub fn active_document(&self) -> Option<&DocumentPath> {
        self.registry
            .iter()
            .find(|document| document.active)
            .map(|document| document.path())
    }

    /// Whether the named document has unsaved changes
    pub fn is_dirty(&self, path: &DocumentPath) -> bool {
        self.registry
            .find_by_path(path)
            .map(|document| self.saves.is_dirty(document))
            .unwrap_or(false)
    }

    /// Read access to the registry, for inspection
    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    /// Session audit trail
    pub fn audit_trail(&self) -> &[SessionEvent] {
        &self.audit_trail
    }

    /// Tab tracker audit trail
    pub fn tab_events(&self) -> &[TabEvent] {
        self.tabs.audit_trail()
    }

    /// Activates and records, in that order
    fn activate(&mut self, path: &DocumentPath) -> Result<(), SessionError> {
        self.tabs
            .activate(&mut self.registry, path, &mut *self.scroll)?;
        let seq = self.next_seq();
        self.audit_trail.push(SessionEvent::DocumentActivated {
            path: path.clone(),
            seq,
        });
        Ok(())
    }

    /// Gets the next sequence number and increments the counter
    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
