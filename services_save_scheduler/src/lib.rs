//! # Save Scheduler Service
//!
//! This crate turns bursts of content changes into single coalesced save
//! requests after a quiet period.
//!
//! ## Philosophy
//!
//! - **Cooperative**: No hidden threads; elapsed timers come back through
//!   the host event loop.
//! - **State on the entity**: A document is `Clean` or `Pending(handle)`;
//!   the handle on the document IS the state. The scheduler holds only
//!   configuration.
//! - **Cancel before re-arm**: A superseded timer is cancelled before its
//!   replacement exists, so no stale save can fire.
//! - **Flush always saves**: Flushing a clean document still issues a save.
//!   Close-time durability is deliberate policy, not an oversight.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A timer implementation (that is the deferred task scheduler seam)
//! - A persistence layer (saves go to the gateway, fire-and-forget)
//! - A dirty-content differ (any change notification re-arms)

use services_document_registry::Document;
use std::time::Duration;
use surface_api::{DeferredTask, DeferredTaskScheduler, PersistenceGateway};

/// Per-document debounce scheduler
///
/// All per-document state lives on the [`Document`] as its `pending_save`
/// handle; no other component may read or write the handle.
#[derive(Debug, Clone)]
pub struct SaveScheduler {
    /// Quiet period a document must stay unchanged before its save fires
    quiet_period: Duration,
}

impl SaveScheduler {
    /// Quiet period used by the editing surface
    pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(1000);

    /// Creates a scheduler with the default one-second quiet period
    pub fn new() -> Self {
        Self {
            quiet_period: Self::DEFAULT_QUIET_PERIOD,
        }
    }

    /// Creates a scheduler with an explicit quiet period
    pub fn with_quiet_period(quiet_period: Duration) -> Self {
        Self { quiet_period }
    }

    /// Returns the configured quiet period
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Records a content change and (re-)arms the document's save timer
    ///
    /// `Clean -> Pending`, or `Pending -> Pending` with the outstanding
    /// timer cancelled before the new one is armed.
    pub fn on_content_changed(
        &self,
        document: &mut Document,
        timer: &mut dyn DeferredTaskScheduler,
    ) {
        if let Some(handle) = document.pending_save.take() {
            timer.cancel(handle);
        }
        let handle = timer.schedule_after(
            self.quiet_period,
            DeferredTask::FlushDocument(document.path().clone()),
        );
        document.pending_save = Some(handle);
    }

    /// Cancels any outstanding timer and saves the document's current
    /// content
    ///
    /// Idempotent, and unconditional: a clean document is saved too.
    pub fn flush(
        &self,
        document: &mut Document,
        timer: &mut dyn DeferredTaskScheduler,
        gateway: &mut dyn PersistenceGateway,
    ) {
        if let Some(handle) = document.pending_save.take() {
            timer.cancel(handle);
        }
        gateway.request_save(document.path(), &document.content);
    }

    /// Cancels any outstanding timer without saving
    ///
    /// Only for teardown paths that do not require a final save on their
    /// own; the close path flushes instead.
    pub fn cancel(&self, document: &mut Document, timer: &mut dyn DeferredTaskScheduler) {
        if let Some(handle) = document.pending_save.take() {
            timer.cancel(handle);
        }
    }

    /// Flushes every document that currently has a pending save
    ///
    /// Returns how many documents were flushed. Clean documents are left
    /// untouched; this is the focus-transition path, not the close path.
    pub fn flush_all<'a, I>(
        &self,
        documents: I,
        timer: &mut dyn DeferredTaskScheduler,
        gateway: &mut dyn PersistenceGateway,
    ) -> usize
    where
        I: IntoIterator<Item = &'a mut Document>,
    {
        let mut flushed = 0;
        for document in documents {
            if document.pending_save.is_some() {
                self.flush(document, timer, gateway);
                flushed += 1;
            }
        }
        flushed
    }

    /// Whether the document has a pending, not-yet-fired save
    pub fn is_dirty(&self, document: &Document) -> bool {
        document.pending_save.is_some()
    }
}

impl Default for SaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}
