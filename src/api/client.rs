//! Generic authenticated request path.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::auth::AccessToken;
use crate::time::{Clock, SystemClock};
use crate::transport::{HttpClient, RequestParams};

use super::{ApiError, AuthError};

/// Production endpoint of the v3 REST surface.
pub const DEFAULT_ENDPOINT: &str = "https://api.squadcast.com/v3";

/// Sub-path of the token-exchange endpoint.
const TOKEN_EXCHANGE_PATH: &str = "/oauth/access-token";

/// Header carrying the refresh token on exchange requests.
const REFRESH_TOKEN_HEADER: http::HeaderName = http::HeaderName::from_static("x-refresh-token");

/// Uniform `{"data": ...}` wrapper around every REST response payload.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Client for the OAuth-authenticated REST surface.
///
/// Holds a base URL, the current access token, and the refresh token used
/// to obtain the next one. Every operation ensures a non-expired bearer
/// token first, exchanging the refresh token transparently when the held
/// token is absent or expired. A failed exchange aborts the operation.
///
/// The token slot sits behind an async mutex, so a client shared between
/// tasks performs at most one exchange round trip even when several calls
/// observe an expired token at once.
///
/// # Example
///
/// ```no_run
/// use squadcast::api::ApiClient;
/// use squadcast::transport::ReqwestClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ReqwestClient::new(), "my-refresh-token");
/// for service in client.services().await? {
///     println!("{} ({})", service.name, service.id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient<H, C = SystemClock> {
    http: H,
    clock: C,
    base_url: url::Url,
    token: Mutex<AccessToken>,
}

impl<H: HttpClient> ApiClient<H> {
    /// Creates a client for the production endpoint.
    ///
    /// The client starts without an access token; the first authenticated
    /// call performs the exchange.
    #[must_use]
    pub fn new(http: H, refresh_token: impl Into<String>) -> Self {
        Self {
            http,
            clock: SystemClock,
            base_url: url::Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            token: Mutex::new(AccessToken::from_refresh_token(refresh_token)),
        }
    }
}

impl<H, C> ApiClient<H, C> {
    /// Points the client at a different endpoint (staging, a test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: url::Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Replaces the held token wholesale.
    ///
    /// Useful to seed a pre-issued token and skip the first exchange.
    #[must_use]
    pub fn with_access_token(self, token: AccessToken) -> Self {
        Self {
            token: Mutex::new(token),
            ..self
        }
    }

    /// Swaps the clock used for expiry checks.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> ApiClient<H, C2> {
        ApiClient {
            http: self.http,
            clock,
            base_url: self.base_url,
            token: self.token,
        }
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &url::Url {
        &self.base_url
    }
}

impl<H: HttpClient, C: Clock> ApiClient<H, C> {
    /// Issues an authenticated request and decodes the enveloped payload.
    ///
    /// This is the generic path all resource operations go through:
    /// ensure a valid token, build the request, attach the bearer header,
    /// execute, and unwrap the `{"data": ...}` envelope on a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Authentication`] when no valid token could be
    /// obtained, [`ApiError::Transport`] when the round trip fails,
    /// [`ApiError::Status`] on a non-2xx response, and [`ApiError::Decode`]
    /// when the body does not match the expected envelope shape.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        params: RequestParams,
    ) -> Result<T, ApiError> {
        let bearer = self.bearer_token().await?;
        let value = http::HeaderValue::from_str(&format!("Bearer {bearer}")).map_err(|_| {
            AuthError::InvalidCredential {
                credential: "access token",
            }
        })?;
        let request = params
            .into_request(&self.base_url)
            .with_header(http::header::AUTHORIZATION, value);

        let response = self.http.request(request).await?;
        if !response.is_success() {
            tracing::debug!("API request rejected with status {}", response.status);
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        let envelope: Envelope<T> = serde_json::from_slice(&response.body)?;
        Ok(envelope.data)
    }

    /// Returns a bearer token valid at the current instant, exchanging the
    /// refresh token first when the held one is absent or expired.
    ///
    /// The token slot stays locked across check and exchange, so concurrent
    /// callers serialize on the refresh instead of racing it.
    async fn bearer_token(&self) -> Result<String, AuthError> {
        let mut token = self.token.lock().await;
        if token.needs_refresh(self.clock.now()) {
            tracing::debug!("Access token absent or expired, exchanging refresh token");
            let refresh_token = token.refresh_token.clone();
            *token = self.exchange_refresh_token(&refresh_token).await?;
        }
        Ok(token.access_token.clone())
    }

    /// Performs the token-exchange round trip.
    ///
    /// The refresh token travels in a dedicated header; only an exact 200
    /// is accepted.
    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<AccessToken, AuthError> {
        let value = http::HeaderValue::from_str(refresh_token).map_err(|_| {
            AuthError::InvalidCredential {
                credential: "refresh token",
            }
        })?;
        let request = RequestParams::get(TOKEN_EXCHANGE_PATH)
            .into_request(&self.base_url)
            .with_header(REFRESH_TOKEN_HEADER, value);

        let response = self.http.request(request).await?;
        if response.status != http::StatusCode::OK {
            return Err(AuthError::Status {
                status: response.status,
            });
        }

        let envelope: Envelope<AccessToken> = serde_json::from_slice(&response.body)?;
        Ok(envelope.data)
    }
}
