//! # Session Types
//!
//! This crate defines the shared vocabulary of the editor session services.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Documents are addressed by a typed path,
//!   never by a bare string or a positional index.
//! - **Type safety first**: Value types cannot be confused with handles or
//!   entity state.
//! - **No behavior**: This crate holds data, not policy.
//!
//! ## Key Types
//!
//! - [`DocumentPath`]: The stable identifier of an open document
//! - [`DisplayOptions`]: Presentation metadata resolved once at open time

pub mod display;
pub mod path;

pub use display::DisplayOptions;
pub use path::DocumentPath;
