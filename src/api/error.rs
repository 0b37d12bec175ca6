//! Error types for the REST client.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for the refresh-token exchange.
///
/// The exchange is a prerequisite of every authenticated call, so these
/// surface wrapped in [`ApiError::Authentication`] to keep "could not log
/// in" distinguishable from "the call itself failed".
#[derive(Debug, Error)]
pub enum AuthError {
    /// The exchange round trip could not complete.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The exchange endpoint answered with a status other than 200.
    #[error("unexpected status code: {status}")]
    Status {
        /// Status code the exchange endpoint returned.
        status: http::StatusCode,
    },

    /// The exchange response did not contain a token envelope.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// A credential contains bytes that cannot be sent in an HTTP header.
    #[error("{credential} is not a valid header value")]
    InvalidCredential {
        /// Which credential was rejected.
        credential: &'static str,
    },
}

/// Error type for authenticated REST operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid bearer token could be obtained for the call.
    ///
    /// A failed exchange aborts the operation before the resource request
    /// is issued; it is never papered over with a stale credential.
    #[error("Authentication failed: {0}")]
    Authentication(#[from] AuthError),

    /// The resource round trip could not complete.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The endpoint answered with a status outside the 2xx range.
    ///
    /// The response body is not parsed for structured error detail.
    #[error("unexpected status code: {status}")]
    Status {
        /// Status code the endpoint returned.
        status: http::StatusCode,
    },

    /// The response body did not match the expected envelope shape.
    #[error("Response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}
