//! # Persistence Gateway
//!
//! Abstraction for fetching and storing document content.
//!
//! ## Philosophy
//!
//! **The core never waits on storage.**
//!
//! Fetches are initiated here and complete later as a content-arrived
//! boundary event. Saves are fire-and-forget: no success or failure is ever
//! observed by the core, and all retry policy lives behind this seam.
//!
//! ## Not For
//!
//! - On-disk formats or wire formats (entirely the gateway's concern)
//! - Retry or backoff policy (the core performs no retries)

use session_types::DocumentPath;
use thiserror::Error;

/// Content request failure
///
/// Surfaced to the caller of an open-file request. No document is created
/// and the core does not retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The gateway has no content for the path
    #[error("No content available for {0}")]
    Unresolvable(DocumentPath),

    /// The gateway refused the request
    #[error("Content request rejected for {path}: {reason}")]
    Rejected {
        /// Path the request was for
        path: DocumentPath,
        /// Gateway-supplied reason
        reason: String,
    },
}

/// Persistence gateway trait
///
/// # Implementation Notes
///
/// - `request_content` fails fast for paths the gateway cannot resolve;
///   otherwise the content arrives later as a boundary event
/// - `request_save` must accept every call; there is no way to observe the
///   outcome and no way to cancel a save already requested
pub trait PersistenceGateway {
    /// Initiates an asynchronous content fetch for `path`
    ///
    /// A successful return means a content-arrived event for `path` will
    /// eventually be delivered to the session.
    fn request_content(&mut self, path: &DocumentPath) -> Result<(), FetchError>;

    /// Requests that `content` be persisted for `path`
    ///
    /// Fire-and-forget: the core observes neither success nor failure.
    fn request_save(&mut self, path: &DocumentPath, content: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Unresolvable(DocumentPath::new("/gone.txt"));
        assert_eq!(format!("{}", err), "No content available for /gone.txt");

        let err = FetchError::Rejected {
            path: DocumentPath::new("/locked.txt"),
            reason: "read-only workspace".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Content request rejected for /locked.txt: read-only workspace"
        );
    }
}
