//! Authenticated REST client for the incident-management API.
//!
//! This module provides:
//! - The generic authenticated request path ([`ApiClient`])
//! - Transparent refresh-token exchange before each call
//! - Typed service resources ([`Service`]) decoded from the uniform
//!   `{"data": ...}` response envelope
//!
//! Incident creation goes through the separately-keyed
//! [`webhook`](crate::webhook) surface instead.

mod client;
mod error;
mod services;


pub use client::{ApiClient, DEFAULT_ENDPOINT};
pub use error::{ApiError, AuthError};
pub use services::Service;
