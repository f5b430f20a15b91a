//! Opaque handles issued by surface collaborators

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Handle to a scheduled-but-not-yet-fired deferred task
///
/// Handle identity is significant: when a timer fires, the firing is honored
/// only if the handle still matches the one stored on the document. A
/// superseded handle firing late is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(Uuid);

impl TaskHandle {
    /// Allocates a fresh task handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task handle from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task:{}", self.0)
    }
}

/// Handle to an active change subscription for one document
///
/// Held by the session for the document's open lifetime and passed back to
/// the notifier on teardown. Never a string-keyed global lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionHandle(Uuid);

impl SubscriptionHandle {
    /// Allocates a fresh subscription handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a subscription handle from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubscriptionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_handles_are_unique() {
        let a = TaskHandle::new();
        let b = TaskHandle::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_task_handle_from_uuid() {
        let uuid = Uuid::new_v4();
        let handle = TaskHandle::from_uuid(uuid);
        assert_eq!(handle.as_uuid(), uuid);
    }

    #[test]
    fn test_subscription_handles_are_unique() {
        let a = SubscriptionHandle::new();
        let b = SubscriptionHandle::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_prefixes() {
        assert!(format!("{}", TaskHandle::new()).starts_with("task:"));
        assert!(format!("{}", SubscriptionHandle::new()).starts_with("subscription:"));
    }
}
