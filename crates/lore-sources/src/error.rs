//! Source error types.
//!
//! These never reach callers of [`crate::SourceClient`]: each fetcher logs
//! the error and converts it into its placeholder result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the service asked us to wait.
        retry_after_secs: u64,
    },

    /// Failed to parse a service response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The service had nothing for the topic.
    #[error("no results for '{0}'")]
    NotFound(String),

    /// The topic resolved to an encyclopedia disambiguation page.
    #[error("'{0}' is ambiguous (disambiguation page)")]
    Disambiguation(String),

    /// The source needs an API key that is not configured.
    #[error("{0} API key is not configured")]
    MissingApiKey(&'static str),
}
