//! Simulated persistence gateway over an in-memory store

use session_types::DocumentPath;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use surface_api::{FetchError, PersistenceGateway};

/// One recorded save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Path the save was issued for
    pub path: DocumentPath,
    /// Content captured at save time
    pub content: String,
}

#[derive(Debug, Default)]
struct GatewayInner {
    /// Backing store; BTreeMap for stable iteration in assertions
    store: BTreeMap<DocumentPath, String>,
    /// Fetches initiated but not yet delivered to the session
    pending_fetches: Vec<(DocumentPath, String)>,
    /// Every save request, in issue order
    saves: Vec<SaveRequest>,
}

/// Simulated persistence gateway
///
/// Fetches succeed for seeded paths and are queued until the test delivers
/// them as content-arrived events; saves are recorded in order and applied
/// to the backing store.
#[derive(Debug, Clone, Default)]
pub struct SimPersistenceGateway {
    inner: Rc<RefCell<GatewayInner>>,
}

impl SimPersistenceGateway {
    /// Creates a gateway with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds content the gateway can resolve
    pub fn seed(&self, path: impl Into<DocumentPath>, content: impl Into<String>) {
        self.inner
            .borrow_mut()
            .store
            .insert(path.into(), content.into());
    }

    /// Drains fetches initiated since the last call
    ///
    /// The test delivers these to the session as content-arrived events, in
    /// whatever order the scenario calls for.
    pub fn take_pending_fetches(&mut self) -> Vec<(DocumentPath, String)> {
        std::mem::take(&mut self.inner.borrow_mut().pending_fetches)
    }

    /// Every save request issued so far, in order
    pub fn save_requests(&self) -> Vec<SaveRequest> {
        self.inner.borrow().saves.clone()
    }

    /// Content currently stored for `path`
    pub fn stored_content(&self, path: &DocumentPath) -> Option<String> {
        self.inner.borrow().store.get(path).cloned()
    }
}

impl PersistenceGateway for SimPersistenceGateway {
    fn request_content(&mut self, path: &DocumentPath) -> Result<(), FetchError> {
        let mut inner = self.inner.borrow_mut();
        match inner.store.get(path) {
            Some(content) => {
                let snapshot = content.clone();
                inner.pending_fetches.push((path.clone(), snapshot));
                Ok(())
            }
            None => Err(FetchError::Unresolvable(path.clone())),
        }
    }

    fn request_save(&mut self, path: &DocumentPath, content: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.saves.push(SaveRequest {
            path: path.clone(),
            content: content.to_string(),
        });
        inner.store.insert(path.clone(), content.to_string());
    }
}
