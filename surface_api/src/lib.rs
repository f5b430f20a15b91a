//! # Surface API
//!
//! Abstraction layer between the session core and its editing-surface
//! collaborators: deferred task scheduling, persistence, change
//! subscriptions, mode resolution, and tab scrolling.
//!
//! ## Philosophy
//!
//! **Collaborators are mechanisms, not policies.**
//!
//! Every trait in this crate does one thing, does it synchronously from the
//! caller's point of view, and never blocks. Asynchronous completions
//! (fetched content, elapsed timers) come back to the core as boundary
//! events serialized with everything else. No trait here ever calls back
//! into the core.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Given the same calls, a conforming implementation
//!    produces the same observable sequence.
//! 2. **Non-blocking**: Every method returns immediately.
//! 3. **Cancellation-safe**: Cancelling a scheduled task is always legal and
//!    has no effect beyond suppressing it.
//! 4. **No hidden coupling**: Fire-and-forget calls return nothing the core
//!    could come to depend on.

pub mod changes;
pub mod handles;
pub mod modes;
pub mod persistence;
pub mod scheduler;
pub mod scroll;

pub use changes::{ChangeNotifier, SubscriptionError};
pub use handles::{SubscriptionHandle, TaskHandle};
pub use modes::ModeResolver;
pub use persistence::{FetchError, PersistenceGateway};
pub use scheduler::{DeferredTask, DeferredTaskScheduler, ElapsedTask};
pub use scroll::TabScrollSink;
