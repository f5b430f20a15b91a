//! # Mode Resolver
//!
//! Abstraction for resolving a document's presentation options from its
//! path.
//!
//! ## Philosophy
//!
//! **Resolution is pure and happens exactly once.**
//!
//! The resolver is a synchronous function of the path, consulted a single
//! time when a document is created. Which highlighting mode a file uses is
//! entirely the resolver's concern; the session only carries the result.

use session_types::{DisplayOptions, DocumentPath};

/// Mode resolver trait
///
/// # Implementation Notes
///
/// - Must be a pure function of the path: same path, same options
/// - Must not fail; an unrecognized path resolves to plain-text options
pub trait ModeResolver {
    /// Resolves presentation options for `path`
    fn resolve(&self, path: &DocumentPath) -> DisplayOptions;
}
