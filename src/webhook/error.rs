//! Error types for the webhook client.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for incident posting.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The round trip could not complete.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The endpoint answered with a status other than 200.
    ///
    /// The webhook surface signals acceptance with an exact 200; other
    /// 2xx codes count as failures too.
    #[error("unexpected status code: {status}")]
    Status {
        /// Status code the endpoint returned.
        status: http::StatusCode,
    },

    /// The incident payload could not be serialized to JSON.
    #[error("Incident serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
