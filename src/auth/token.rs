//! Access-token model.

use std::time::SystemTime;

use serde::Deserialize;

use crate::time::epoch_seconds;

/// A bearer token obtained by exchanging a refresh token.
///
/// Mirrors the token-exchange payload. Issued and expiry instants are epoch
/// seconds as reported by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    /// Bearer token value sent on authenticated calls.
    pub access_token: String,
    /// Epoch seconds after which the token must not be used.
    pub expires_at: i64,
    /// Epoch seconds at which the token was issued.
    #[serde(default)]
    pub issued_at: i64,
    /// Long-lived refresh token used to obtain the next access token.
    #[serde(default)]
    pub refresh_token: String,
    /// Token type as reported by the API, normally `bearer`.
    #[serde(default)]
    pub token_type: String,
}

impl AccessToken {
    /// Creates a token holding only a refresh token.
    ///
    /// The result is not usable as a bearer credential yet; it reports
    /// [`needs_refresh`](Self::needs_refresh) until exchanged.
    #[must_use]
    pub fn from_refresh_token(refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: String::new(),
            expires_at: 0,
            issued_at: 0,
            refresh_token: refresh_token.into(),
            token_type: String::new(),
        }
    }

    /// Returns true if the token is expired at `now`.
    ///
    /// A token expiring exactly at `now` already counts as expired, so a
    /// credential is never sent in the second it stops being valid.
    #[must_use]
    pub fn is_expired_at(&self, now: SystemTime) -> bool {
        epoch_seconds(now) >= self.expires_at
    }

    /// Returns true if the token must be exchanged before use.
    ///
    /// Both a never-issued token (empty bearer value) and an expired one
    /// need a refresh round trip.
    #[must_use]
    pub fn needs_refresh(&self, now: SystemTime) -> bool {
        self.access_token.is_empty() || self.is_expired_at(now)
    }
}
