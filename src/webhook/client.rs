//! Webhook client for the key-scoped incident endpoint.

use crate::transport::{HttpClient, RequestParams};

use super::{Incident, WebhookError};

/// Production endpoint of the v2 incident webhook.
pub const DEFAULT_ENDPOINT: &str = "https://api.squadcast.com/v2/incidents/api";

/// Client for the per-service incident webhook.
///
/// Holds a base URL and a static API key. The key is the final path
/// segment of every request and fully determines authorization; there is
/// no token lifecycle on this surface.
///
/// # Example
///
/// ```no_run
/// use squadcast::transport::ReqwestClient;
/// use squadcast::webhook::{Incident, WebhookClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WebhookClient::new(ReqwestClient::new(), "service-api-key");
/// client
///     .post_incident(&Incident::trigger("Payment API down", "5xx rate above 20%"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookClient<H> {
    http: H,
    base_url: url::Url,
    api_key: String,
}

impl<H: HttpClient> WebhookClient<H> {
    /// Creates a client posting to the production endpoint.
    #[must_use]
    pub fn new(http: H, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: url::Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            api_key: api_key.into(),
        }
    }

    /// Points the client at a different endpoint (staging, a test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: url::Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Posts an incident event.
    ///
    /// The payload travels as JSON to a sub-path equal to the API key,
    /// with a `Content-Type: application/json` header.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Serialize`] when the payload cannot be
    /// serialized, [`WebhookError::Transport`] when the round trip fails,
    /// and [`WebhookError::Status`] on any response status other than an
    /// exact 200.
    pub async fn post_incident(&self, incident: &Incident) -> Result<(), WebhookError> {
        let body = serde_json::to_vec(incident)?;
        let request = RequestParams::post(self.api_key.as_str())
            .with_body(body)
            .into_request(&self.base_url)
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            );

        let response = self.http.request(request).await?;
        if response.status != http::StatusCode::OK {
            tracing::debug!("Incident rejected by webhook endpoint: {}", response.status);
            return Err(WebhookError::Status {
                status: response.status,
            });
        }

        Ok(())
    }

    /// Creates an incident.
    ///
    /// Alias for [`post_incident`](Self::post_incident). Incident creation
    /// is only available through the v2 webhook surface; the v3 REST API
    /// has no operation for it.
    ///
    /// # Errors
    ///
    /// Same as [`post_incident`](Self::post_incident).
    pub async fn create_incident(&self, incident: &Incident) -> Result<(), WebhookError> {
        self.post_incident(incident).await
    }
}
