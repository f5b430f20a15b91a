//! # Change Subscription Service
//!
//! Abstraction for observing content changes to a tracked document.
//!
//! ## Philosophy
//!
//! **Dirty detection is an explicit per-document subscription.**
//!
//! The session holds a [`SubscriptionHandle`](crate::SubscriptionHandle)
//! for every watched document and returns it on teardown. Change
//! notifications reach the session as content-changed boundary events and
//! fire only when the value actually differs from the previous one.

use session_types::DocumentPath;
use thiserror::Error;

use crate::handles::SubscriptionHandle;

/// Change subscription wiring failure
///
/// A document that cannot be watched cannot indicate unsaved changes, so
/// this is fatal to the operation that was wiring it up, never swallowed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubscriptionError {
    /// A live subscription for the path already exists
    #[error("Already watching {0}")]
    AlreadyWatching(DocumentPath),

    /// The surface refused to watch the path
    #[error("Cannot watch {path}: {reason}")]
    WiringFailed {
        /// Path the subscription was for
        path: DocumentPath,
        /// Surface-supplied reason
        reason: String,
    },
}

/// Change notifier trait
///
/// # Implementation Notes
///
/// - One live subscription per path; a second subscribe for the same path
///   is a wiring error
/// - `current` seeds the comparison value so the first notification only
///   fires on a real change
/// - `unsubscribe` of an unknown handle is a no-op
pub trait ChangeNotifier {
    /// Starts watching `path` for content changes
    ///
    /// `current` is the content value at subscription time; notifications
    /// fire only for values that differ from the last observed one.
    fn subscribe(
        &mut self,
        path: &DocumentPath,
        current: &str,
    ) -> Result<SubscriptionHandle, SubscriptionError>;

    /// Stops watching the subscription identified by `handle`
    fn unsubscribe(&mut self, handle: SubscriptionHandle);
}
