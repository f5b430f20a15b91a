//! Simulated change-subscription service

use session_types::DocumentPath;
use std::cell::RefCell;
use std::rc::Rc;
use surface_api::{ChangeNotifier, SubscriptionError, SubscriptionHandle};

/// A content change observed by a live subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Path of the changed document
    pub path: DocumentPath,
    /// Value after the change
    pub new_value: String,
    /// Value before the change
    pub old_value: String,
}

#[derive(Debug)]
struct Watch {
    handle: SubscriptionHandle,
    path: DocumentPath,
    last: String,
}

#[derive(Debug, Default)]
struct BusInner {
    watches: Vec<Watch>,
    queued: Vec<ChangeEvent>,
    fail_next_subscribe: Option<String>,
}

/// Simulated change bus
///
/// A test mutates document content through `edit`; the bus emits a change
/// event only when a live subscription for the path exists and the value
/// actually differs from the last observed one. Queued events are drained
/// by the test and delivered to the session as content-changed events.
#[derive(Debug, Clone, Default)]
pub struct SimChangeBus {
    inner: Rc<RefCell<BusInner>>,
}

impl SimChangeBus {
    /// Creates a bus with no subscriptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the editing surface changing a document's value
    ///
    /// No subscription or an identical value means no event.
    pub fn edit(&mut self, path: &DocumentPath, new_value: &str) {
        let mut inner = self.inner.borrow_mut();
        let Some(watch) = inner.watches.iter_mut().find(|w| &w.path == path) else {
            return;
        };
        if watch.last == new_value {
            return;
        }
        let old_value = std::mem::replace(&mut watch.last, new_value.to_string());
        let event = ChangeEvent {
            path: path.clone(),
            new_value: new_value.to_string(),
            old_value,
        };
        inner.queued.push(event);
    }

    /// Drains events emitted since the last call
    pub fn take_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.inner.borrow_mut().queued)
    }

    /// Number of live subscriptions
    pub fn watch_count(&self) -> usize {
        self.inner.borrow().watches.len()
    }

    /// Whether a live subscription for `path` exists
    pub fn is_watching(&self, path: &DocumentPath) -> bool {
        self.inner.borrow().watches.iter().any(|w| &w.path == path)
    }

    /// Makes the next subscribe call fail with `reason`
    ///
    /// For exercising the fatal-wiring-error path.
    pub fn fail_next_subscribe(&mut self, reason: impl Into<String>) {
        self.inner.borrow_mut().fail_next_subscribe = Some(reason.into());
    }
}

impl ChangeNotifier for SimChangeBus {
    fn subscribe(
        &mut self,
        path: &DocumentPath,
        current: &str,
    ) -> Result<SubscriptionHandle, SubscriptionError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(reason) = inner.fail_next_subscribe.take() {
            return Err(SubscriptionError::WiringFailed {
                path: path.clone(),
                reason,
            });
        }
        if inner.watches.iter().any(|w| &w.path == path) {
            return Err(SubscriptionError::AlreadyWatching(path.clone()));
        }
        let handle = SubscriptionHandle::new();
        inner.watches.push(Watch {
            handle,
            path: path.clone(),
            last: current.to_string(),
        });
        Ok(handle)
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.inner
            .borrow_mut()
            .watches
            .retain(|w| w.handle != handle);
    }
}
