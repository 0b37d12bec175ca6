//! Typed service resources.

use serde::Deserialize;

use crate::time::Clock;
use crate::transport::{HttpClient, RequestParams};

use super::{ApiClient, ApiError};

/// A monitored entity in the upstream system.
///
/// Each service owns the API key that authorizes incident creation through
/// the webhook surface, so looking up a service is typically the step right
/// before posting an incident for it.
///
/// Unknown fields in the payload are ignored; the API adds fields over time.
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    /// Unique identifier assigned by the API.
    pub id: String,
    /// Human-readable service name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Key that scopes incident webhooks to this service.
    pub api_key: String,
    /// URL-safe slug derived from the name.
    #[serde(default)]
    pub slug: String,
}

impl<H: HttpClient, C: Clock> ApiClient<H, C> {
    /// Lists all services visible to the authenticated account.
    ///
    /// The sequence preserves server-given order; no client-side filtering
    /// or pagination is applied.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when authentication, the round trip, or
    /// response decoding fails.
    pub async fn services(&self) -> Result<Vec<Service>, ApiError> {
        self.request_json(RequestParams::get("/services")).await
    }

    /// Looks up a service by its exact name.
    ///
    /// Filtering happens server-side via the `name` query parameter.
    /// Returns `Ok(None)` when no service matches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when authentication, the round trip, or
    /// response decoding fails.
    pub async fn service_by_name(&self, name: &str) -> Result<Option<Service>, ApiError> {
        self.request_json(RequestParams::get("/services").with_query("name", name))
            .await
    }

    /// Fetches a single service by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when authentication, the round trip, or
    /// response decoding fails; an unknown identifier surfaces as
    /// [`ApiError::Status`] with the 404 the endpoint answers.
    pub async fn service_by_id(&self, id: &str) -> Result<Service, ApiError> {
        self.request_json(RequestParams::get(format!("/services/{id}")))
            .await
    }
}
