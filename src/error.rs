//! Error types for document loading.
//!
//! Not-found is deliberately absent from this taxonomy: a missing record is a
//! normal, representable state that resolution reports as `None`, never as an
//! error.

use thiserror::Error;

/// Errors that can occur while loading the documentation document.
///
/// Any of these is fatal to the navigation attempt that triggered the load;
/// none of them poisons the session, and a later navigation may retry.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configured document location is not a valid URL.
    #[error("invalid document location: {0}")]
    Location(#[from] url::ParseError),

    /// Network-level failure reaching the document endpoint.
    #[error("document fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The endpoint answered, but not with a 2xx.
    #[error("document endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body arrived but was not a well-formed document.
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The navigation session was torn down while the fetch was in flight.
    #[error("navigation cancelled before the document arrived")]
    Cancelled,
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;
