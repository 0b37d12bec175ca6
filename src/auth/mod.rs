//! Authentication model for the refresh-token exchange flow.
//!
//! The API authenticates calls with short-lived bearer tokens obtained by
//! exchanging a long-lived refresh token. This module provides the
//! [`AccessToken`] type and its expiry rules; the exchange round trip itself
//! lives on [`ApiClient`](crate::api::ApiClient).

mod token;


pub use token::AccessToken;
