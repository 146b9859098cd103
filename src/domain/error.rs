//! Error types for the zcountry plugin.
//!
//! This module defines the centralized error type [`CountryLookupError`] and a type
//! alias [`Result`] used throughout the plugin. Errors are derived with `thiserror`.
//!
//! Lookup failures never escape the event handler: they are turned into
//! user-facing notifications there, and the underlying detail only reaches the
//! trace log.

use thiserror::Error;

/// The main error type for zcountry operations.
#[derive(Debug, Error)]
pub enum CountryLookupError {
    /// The query contains characters other than ASCII letters and whitespace.
    ///
    /// Carries the offending character so it can be logged.
    #[error("invalid query: unexpected character {0:?}")]
    InvalidQuery(char),

    /// The API answered but no country matches the query.
    ///
    /// Covers the 404 status, an error object in the body, and an empty array.
    #[error("no country matches the query")]
    NotFound,

    /// The API answered with an unexpected HTTP status.
    #[error("unexpected HTTP status {status}")]
    Http {
        /// Status code returned by the host's web request.
        status: u16,
    },

    /// The response body could not be decoded into country records.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zcountry operations.
pub type Result<T> = std::result::Result<T, CountryLookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CountryLookupError::InvalidQuery('7').to_string(),
            "invalid query: unexpected character '7'"
        );
        assert_eq!(
            CountryLookupError::Http { status: 503 }.to_string(),
            "unexpected HTTP status 503"
        );
        assert_eq!(CountryLookupError::NotFound.to_string(), "no country matches the query");
    }

    #[test]
    fn test_decode_error_converts() {
        let err: CountryLookupError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, CountryLookupError::Decode(_)));
    }
}
