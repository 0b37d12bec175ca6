//! Error types for HTTP transport.

use thiserror::Error;

/// Error type for HTTP transport failures.
///
/// Describes what went wrong at the wire level, before any status code or
/// body interpretation. Higher layers wrap this into their own error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution failures, connection refused, TLS handshake
    /// failures, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// Indicates a configuration error rather than a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
