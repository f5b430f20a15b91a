//! Reachable-state invariants
//!
//! At most one active document, dirty iff a save is pending, and no two
//! documents sharing a path, checked after every step of a churny
//! scenario, not just at the end.
