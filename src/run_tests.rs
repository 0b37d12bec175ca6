//! Tests for the run module.

use super::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use squadcast::config::{Cli, StatusArg};
use squadcast::transport::{HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns a configurable sequence of responses.
///
/// Clones share the same response queue and captured requests, so the
/// copy handed to the dispatch and the copy kept for assertions agree.
#[derive(Debug, Clone)]
struct MockClient {
    inner: Arc<MockInner>,
}

#[derive(Debug)]
struct MockInner {
    responses: std::sync::Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: std::sync::Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            inner: Arc::new(MockInner {
                responses: std::sync::Mutex::new(responses),
                requests: std::sync::Mutex::new(Vec::new()),
                call_count: AtomicUsize::new(0),
            }),
        }
    }

    fn calls(&self) -> usize {
        self.inner.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.inner.call_count.fetch_add(1, Ordering::SeqCst);
        self.inner.requests.lock().unwrap().push(req);
        self.inner.responses.lock().unwrap().remove(0)
    }
}

fn json_ok(body: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::new(
        http::StatusCode::OK,
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    ))
}

fn status_only(status: http::StatusCode) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::new(status, http::HeaderMap::new(), vec![]))
}

fn token_exchange_ok() -> Result<HttpResponse, HttpError> {
    json_ok(r#"{"data":{"access_token":"fresh","expires_at":99999999999}}"#)
}

fn services_list() -> Result<HttpResponse, HttpError> {
    json_ok(
        r#"{"data":[
            {"id":"5e8edb24668e003cb0b18ba1","name":"Payment API Service","description":"Payment flows","api_key":"b62fd6b6aee8b37b8f0627de57b85800cdc6f394","slug":"payment-api-service"},
            {"id":"5e8edb24668e003cb0b18ba2","name":"Checkout Service","description":"","api_key":"4f9ac8b2362990dd220f8bb4f7cd30ccc3dac433","slug":"checkout-service"}
        ]}"#,
    )
}

fn payment_service() -> Result<HttpResponse, HttpError> {
    json_ok(
        r#"{"data":{"id":"5e8edb24668e003cb0b18ba1","name":"Payment API Service","description":"Payment flows","api_key":"b62fd6b6aee8b37b8f0627de57b85800cdc6f394","slug":"payment-api-service"}}"#,
    )
}

fn no_service() -> Result<HttpResponse, HttpError> {
    json_ok(r#"{"data":null}"#)
}

/// Settings pinned to test endpoints so nothing reaches the network.
fn test_settings(token: Option<&str>) -> Settings {
    let mut args = vec![
        "squadcast",
        "--api-url",
        "https://api.test.invalid/v3",
        "--webhook-url",
        "https://webhook.test.invalid/v2/incidents/api",
    ];
    if let Some(token) = token {
        args.extend(["--refresh-token", token]);
    }

    let cli = Cli::parse_from_iter(args);
    Settings::from_raw(&cli, None, None).unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn service_not_found_displays_name() {
        let error = RunError::ServiceNotFound("Payment API Service".to_string());
        assert_eq!(error.to_string(), "No service named 'Payment API Service'");
    }

    #[test]
    fn config_error_displays_source() {
        let error = RunError::from(ConfigError::missing("refresh_token", "hint"));
        assert!(error.to_string().contains("refresh_token"));
    }

    #[test]
    fn debug_format_works() {
        let error = RunError::ServiceNotFound("x".to_string());
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("ServiceNotFound"));
    }
}

mod services_command {
    use super::*;

    #[tokio::test]
    async fn lists_services_through_the_rest_api() {
        let http = MockClient::new(vec![token_exchange_ok(), services_list()]);
        let settings = test_settings(Some("rt-1"));

        run_command(&settings, http.clone(), Command::Services)
            .await
            .unwrap();

        assert_eq!(http.calls(), 2);
        let requests = http.captured_requests();
        assert_eq!(
            requests[0].url.as_str(),
            "https://api.test.invalid/v3/oauth/access-token"
        );
        assert_eq!(
            requests[1].url.as_str(),
            "https://api.test.invalid/v3/services"
        );
    }

    #[tokio::test]
    async fn missing_refresh_token_fails_before_any_request() {
        let http = MockClient::new(vec![]);
        let settings = test_settings(None);

        let result = run_command(&settings, http.clone(), Command::Services).await;

        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::MissingRequired { .. }))
        ));
        assert_eq!(http.calls(), 0);
    }

    #[tokio::test]
    async fn api_rejection_propagates() {
        let http = MockClient::new(vec![
            token_exchange_ok(),
            status_only(http::StatusCode::INTERNAL_SERVER_ERROR),
        ]);
        let settings = test_settings(Some("rt-1"));

        let result = run_command(&settings, http, Command::Services).await;

        assert!(matches!(result, Err(RunError::Api(_))));
    }
}

mod service_command {
    use super::*;

    #[tokio::test]
    async fn looks_up_by_name() {
        let http = MockClient::new(vec![token_exchange_ok(), payment_service()]);
        let settings = test_settings(Some("rt-1"));

        run_command(
            &settings,
            http.clone(),
            Command::Service {
                name: Some("Payment API Service".to_string()),
                id: None,
            },
        )
        .await
        .unwrap();

        let requests = http.captured_requests();
        assert_eq!(
            requests[1].url.as_str(),
            "https://api.test.invalid/v3/services?name=Payment+API+Service"
        );
    }

    #[tokio::test]
    async fn looks_up_by_id() {
        let http = MockClient::new(vec![token_exchange_ok(), payment_service()]);
        let settings = test_settings(Some("rt-1"));

        run_command(
            &settings,
            http.clone(),
            Command::Service {
                name: None,
                id: Some("5e8edb24668e003cb0b18ba1".to_string()),
            },
        )
        .await
        .unwrap();

        let requests = http.captured_requests();
        assert_eq!(
            requests[1].url.as_str(),
            "https://api.test.invalid/v3/services/5e8edb24668e003cb0b18ba1"
        );
    }

    #[tokio::test]
    async fn unknown_name_returns_not_found() {
        let http = MockClient::new(vec![token_exchange_ok(), no_service()]);
        let settings = test_settings(Some("rt-1"));

        let result = run_command(
            &settings,
            http,
            Command::Service {
                name: Some("Ghost Service".to_string()),
                id: None,
            },
        )
        .await;

        match result {
            Err(RunError::ServiceNotFound(name)) => assert_eq!(name, "Ghost Service"),
            other => panic!("Expected ServiceNotFound, got {other:?}"),
        }
    }
}

mod incident_command {
    use super::*;

    fn incident_with_key(status: StatusArg) -> Command {
        Command::Incident {
            service: None,
            api_key: Some("2f81ac8b2362990dd220f8bb4f7cd30ccc3dac43".to_string()),
            message: "Payment API down".to_string(),
            description: "5xx rate above 20%".to_string(),
            status,
        }
    }

    #[tokio::test]
    async fn direct_api_key_posts_without_rest_traffic() {
        let http = MockClient::new(vec![status_only(http::StatusCode::OK)]);
        // No refresh token needed when the key is given directly.
        let settings = test_settings(None);

        run_command(&settings, http.clone(), incident_with_key(StatusArg::Trigger))
            .await
            .unwrap();

        assert_eq!(http.calls(), 1);
        let requests = http.captured_requests();
        assert_eq!(
            requests[0].url.as_str(),
            "https://webhook.test.invalid/v2/incidents/api/2f81ac8b2362990dd220f8bb4f7cd30ccc3dac43"
        );
    }

    #[tokio::test]
    async fn webhook_payload_carries_message_and_status() {
        let http = MockClient::new(vec![status_only(http::StatusCode::OK)]);
        let settings = test_settings(None);

        run_command(&settings, http.clone(), incident_with_key(StatusArg::Resolve))
            .await
            .unwrap();

        let requests = http.captured_requests();
        let body = requests[0].body.clone().expect("incident post has a body");
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["message"], "Payment API down");
        assert_eq!(value["description"], "5xx rate above 20%");
        assert_eq!(value["status"], "resolve");
    }

    #[tokio::test]
    async fn service_name_resolves_key_then_posts() {
        let http = MockClient::new(vec![
            token_exchange_ok(),
            payment_service(),
            status_only(http::StatusCode::OK),
        ]);
        let settings = test_settings(Some("rt-1"));

        run_command(
            &settings,
            http.clone(),
            Command::Incident {
                service: Some("Payment API Service".to_string()),
                api_key: None,
                message: "Payment API down".to_string(),
                description: String::new(),
                status: StatusArg::Trigger,
            },
        )
        .await
        .unwrap();

        assert_eq!(http.calls(), 3);
        let requests = http.captured_requests();
        assert_eq!(
            requests[1].url.as_str(),
            "https://api.test.invalid/v3/services?name=Payment+API+Service"
        );
        assert_eq!(
            requests[2].url.as_str(),
            "https://webhook.test.invalid/v2/incidents/api/b62fd6b6aee8b37b8f0627de57b85800cdc6f394"
        );
    }

    #[tokio::test]
    async fn unknown_service_name_skips_the_webhook_post() {
        let http = MockClient::new(vec![token_exchange_ok(), no_service()]);
        let settings = test_settings(Some("rt-1"));

        let result = run_command(
            &settings,
            http.clone(),
            Command::Incident {
                service: Some("Ghost Service".to_string()),
                api_key: None,
                message: "Payment API down".to_string(),
                description: String::new(),
                status: StatusArg::Trigger,
            },
        )
        .await;

        assert!(matches!(result, Err(RunError::ServiceNotFound(_))));
        assert_eq!(http.calls(), 2);
    }

    #[tokio::test]
    async fn webhook_rejection_is_a_webhook_error() {
        let http = MockClient::new(vec![status_only(http::StatusCode::ACCEPTED)]);
        let settings = test_settings(None);

        let result = run_command(&settings, http, incident_with_key(StatusArg::Trigger)).await;

        assert!(matches!(result, Err(RunError::Webhook(_))));
    }
}

mod init_command {
    use super::*;

    #[tokio::test]
    async fn writes_the_config_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("squadcast.toml");
        let http = MockClient::new(vec![]);
        let settings = test_settings(None);

        run_command(
            &settings,
            http.clone(),
            Command::Init {
                output: path.clone(),
            },
        )
        .await
        .unwrap();

        assert!(path.exists());
        assert_eq!(http.calls(), 0);
    }

    #[tokio::test]
    async fn unwritable_path_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("squadcast.toml");
        let http = MockClient::new(vec![]);
        let settings = test_settings(None);

        let result = run_command(&settings, http, Command::Init { output: path }).await;

        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::FileWrite { .. }))
        ));
    }
}
