//! Webhook client for incident creation.
//!
//! Incident creation is not part of the v3 REST surface; it goes through
//! the v2 incident webhook, authorized by a per-service API key embedded
//! in the request path. This module provides:
//! - The key-scoped client ([`WebhookClient`])
//! - The incident payload ([`Incident`], [`IncidentStatus`])
//! - The webhook error type ([`WebhookError`])

mod client;
mod error;
mod incident;

#[cfg(test)]
mod incident_tests;

pub use client::{DEFAULT_ENDPOINT, WebhookClient};
pub use error::WebhookError;
pub use incident::{Incident, IncidentStatus};
