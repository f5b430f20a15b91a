//! # Simulated Editing Surface
//!
//! Deterministic implementations of every `surface_api` collaborator for
//! testing.
//!
//! ## Philosophy
//!
//! **Determinism enables thorough testing.**
//!
//! Nothing here consults a clock, spawns a thread, or touches I/O. Time
//! only advances when a test says so, fetches complete when a test delivers
//! them, and every interaction is recorded where a test can read it back.
//! Same inputs + same advances => same observable sequence.
//!
//! Each simulator is a cheap-clone handle over shared state, so a test can
//! keep one handle while moving another into the session under test.

pub mod changes;
pub mod gateway;
pub mod modes;
pub mod scheduler;
pub mod scroll;

pub use changes::{ChangeEvent, SimChangeBus};
pub use gateway::{SaveRequest, SimPersistenceGateway};
pub use modes::SimModeResolver;
pub use scheduler::SimTaskScheduler;
pub use scroll::RecordingScrollSink;
