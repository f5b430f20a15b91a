//! Serialization contracts for boundary types
//!
//! These pin the JSON shapes that cross the session boundary. A failure
//! here means a wire-visible change, not a refactor.
