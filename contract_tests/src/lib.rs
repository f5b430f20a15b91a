//! # Session Contract Tests
//!
//! This crate provides "golden" tests for the editor-session services to
//! ensure their observable behavior does not drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Behavioral contracts are written as code
//! - **Testability first**: Contract tests fail when behavior changes
//! - **Whole-system**: Scenarios run the real session against the simulated
//!   surface, never against hand-rolled partial doubles
//!
//! ## Structure
//!
//! - `invariants`: single-active, dirty-iff-pending, unique paths
//! - `debounce`: coalescing, quiet-period timing, staleness
//! - `tab_lifecycle`: insertion position, close succession, close-time saves
//! - `races`: duplicate opens, late deliveries
//! - `serialization`: serde stability of boundary types

pub mod debounce;
pub mod invariants;
pub mod races;
pub mod serialization;
pub mod tab_lifecycle;

/// Common helpers for driving a session against the simulated surface
pub mod test_helpers {
    use services_editor_session::EditorSession;
    use session_types::DocumentPath;
    use sim_surface::{
        RecordingScrollSink, SimChangeBus, SimModeResolver, SimPersistenceGateway,
        SimTaskScheduler,
    };
    use std::time::Duration;

    /// A session wired to simulated collaborators, with the test keeping a
    /// handle to each
    pub struct SessionHarness {
        /// The session under test
        pub session: EditorSession,
        /// Deterministic timer; advance it to fire debounce saves
        pub scheduler: SimTaskScheduler,
        /// In-memory store recording every save request
        pub gateway: SimPersistenceGateway,
        /// Change bus; edit through it to simulate typing
        pub bus: SimChangeBus,
        /// Counts scroll-into-view hints
        pub scroll: RecordingScrollSink,
    }

    impl SessionHarness {
        /// Builds a fresh session over empty simulated collaborators
        pub fn new() -> Self {
            let scheduler = SimTaskScheduler::new();
            let gateway = SimPersistenceGateway::new();
            let bus = SimChangeBus::new();
            let scroll = RecordingScrollSink::new();
            let session = EditorSession::new(
                Box::new(scheduler.clone()),
                Box::new(gateway.clone()),
                Box::new(bus.clone()),
                Box::new(SimModeResolver::new()),
                Box::new(scroll.clone()),
            );
            Self {
                session,
                scheduler,
                gateway,
                bus,
                scroll,
            }
        }

        /// Seeds gateway content and fully opens the document
        pub fn open(&mut self, path: &str, content: &str) {
            self.gateway.seed(path, content);
            let path = DocumentPath::new(path);
            self.session.open_file(&path).expect("open should succeed");
            self.pump_fetches();
        }

        /// Delivers all pending fetches to the session
        pub fn pump_fetches(&mut self) {
            for (path, content) in self.gateway.take_pending_fetches() {
                self.session
                    .content_arrived(&path, &content)
                    .expect("content arrival should succeed");
            }
        }

        /// Simulates typing: edits through the bus, then pumps the events
        pub fn edit(&mut self, path: &str, value: &str) {
            self.bus.edit(&DocumentPath::new(path), value);
            for event in self.bus.take_events() {
                self.session.content_changed(&event.path, &event.new_value);
            }
        }

        /// Advances time and pumps every elapsed save timer
        pub fn advance(&mut self, delta: Duration) {
            for elapsed in self.scheduler.advance(delta) {
                self.session.save_timer_elapsed(elapsed);
            }
        }

        /// Paths of open tabs in display order
        pub fn tab_order(&self) -> Vec<String> {
            self.session
                .tabs()
                .iter()
                .map(|tab| tab.path.as_str().to_string())
                .collect()
        }

        /// Number of documents currently flagged active
        pub fn active_count(&self) -> usize {
            self.session.tabs().iter().filter(|tab| tab.active).count()
        }
    }

    impl Default for SessionHarness {
        fn default() -> Self {
            Self::new()
        }
    }
}
