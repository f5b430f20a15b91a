//! # Deferred Task Scheduler
//!
//! Abstraction for running a task after a delay, cancellable before it
//! fires.
//!
//! ## Philosophy
//!
//! **No ambient execution.**
//!
//! The scheduler registers and cancels; it never runs session logic itself.
//! When a task's delay elapses, the host event loop delivers the
//! [`ElapsedTask`] back into the session, serialized with every other
//! boundary event. This keeps all state transitions on one logical event
//! loop and keeps implementations trivially deterministic.
//!
//! ## Not For
//!
//! - Periodic timers (one shot only)
//! - Wall-clock alarms (delays are relative)
//! - Cross-thread dispatch (single logical event loop)

use serde::{Deserialize, Serialize};
use session_types::DocumentPath;
use std::time::Duration;

use crate::handles::TaskHandle;

/// A unit of deferred session work
///
/// Typed instead of a closure so the scheduler stays mechanism-only and the
/// session remains the single owner of its state when the task comes due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredTask {
    /// Flush the named document's unsaved changes to the persistence gateway
    FlushDocument(DocumentPath),
}

/// A deferred task whose delay has elapsed
///
/// Carries the handle it was scheduled under so the receiver can detect
/// supersession: a task whose handle no longer matches the document's
/// pending state must be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedTask {
    /// Handle the task was scheduled under
    pub handle: TaskHandle,
    /// The work that came due
    pub task: DeferredTask,
}

/// Deferred task scheduler trait
///
/// # Implementation Notes
///
/// - `schedule_after` must not fire the task inline, even for a zero delay
/// - `cancel` of an unknown or already-fired handle is a no-op
/// - Tasks scheduled earlier with the same due time elapse first
pub trait DeferredTaskScheduler {
    /// Registers `task` to come due after `delay`
    ///
    /// Returns the handle under which the task can be cancelled.
    fn schedule_after(&mut self, delay: Duration, task: DeferredTask) -> TaskHandle;

    /// Suppresses a scheduled task before it fires
    ///
    /// Always safe: cancelling a handle that already fired, was already
    /// cancelled, or was never issued has no effect.
    fn cancel(&mut self, handle: TaskHandle);
}
