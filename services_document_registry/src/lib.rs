//! # Document Registry Service
//!
//! This crate owns the authoritative list of open documents.
//!
//! ## Philosophy
//!
//! - **One owner**: Documents live in the registry and nowhere else; other
//!   services operate on documents passed to them.
//! - **Two views, one truth**: Display order and path lookup are separate
//!   views over the same entries, kept in sync on every insert and remove.
//! - **No positional aliasing**: A path is never used as an index and an
//!   index is never used as an identity.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A buffer or rope (content is an opaque value here)
//! - A file system view (paths are identifiers, not locations)
//! - An activation policy (the tab tracker decides who is active)

pub mod document;
pub mod registry;

pub use document::Document;
pub use registry::{DocumentRegistry, RegistryError};
