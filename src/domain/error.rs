//! Error types for the landing page.
//!
//! This module defines the centralized error type [`LandingError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Only configuration, content and theme loading can fail in a way the caller
//! must handle. Browser failures are logged by the shim and surfaced to the user
//! as notices instead of being propagated.

use thiserror::Error;

/// The main error type for landing page operations.
///
/// # Examples
///
/// ```
/// use leavedesk_landing::LandingError;
///
/// fn validate() -> Result<(), LandingError> {
///     Err(LandingError::Content("product name is empty".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum LandingError {
    /// Filesystem or I/O operation failed.
    ///
    /// Raised when reading configuration, content or theme files, or when the
    /// static site writer cannot create its output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page content failed to parse or validate.
    #[error("Content error: {0}")]
    Content(String),

    /// Theme could not be found or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A browser API was missing or rejected a call.
    ///
    /// Only produced by the wasm shim; the message is the stringified JS error.
    #[error("Platform error: {0}")]
    Platform(String),

    /// The web app manifest could not be serialized.
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// A specialized `Result` type for landing page operations.
pub type Result<T> = std::result::Result<T, LandingError>;
