//! Request construction shared by the REST and webhook clients.

use super::HttpRequest;

/// Parameters for building an [`HttpRequest`] against a base endpoint.
///
/// Both API and webhook calls are described the same way: a method, a path
/// below the endpoint, optional query pairs, and an optional body. The base
/// URL stays with the client, so the same params can target production,
/// staging, or a test server.
///
/// # Example
///
/// ```
/// use squadcast::transport::RequestParams;
/// use url::Url;
///
/// let base = Url::parse("https://api.squadcast.com/v3").unwrap();
/// let request = RequestParams::get("/services")
///     .with_query("name", "Payment API Service")
///     .into_request(&base);
///
/// assert_eq!(
///     request.url.as_str(),
///     "https://api.squadcast.com/v3/services?name=Payment+API+Service"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RequestParams {
    method: http::Method,
    sub_path: String,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestParams {
    /// Creates params for the given method and path below the endpoint.
    #[must_use]
    pub fn new(method: http::Method, sub_path: impl Into<String>) -> Self {
        Self {
            method,
            sub_path: sub_path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates params for a GET request.
    #[must_use]
    pub fn get(sub_path: impl Into<String>) -> Self {
        Self::new(http::Method::GET, sub_path)
    }

    /// Creates params for a POST request.
    #[must_use]
    pub fn post(sub_path: impl Into<String>) -> Self {
        Self::new(http::Method::POST, sub_path)
    }

    /// Appends a query pair.
    ///
    /// Pairs appear in the URL in insertion order, so request URLs are
    /// deterministic and easy to assert on in tests.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds an [`HttpRequest`] targeting `base`.
    ///
    /// The sub-path is joined below the base URL's path, and query pairs are
    /// appended after any query the base URL already carries. Keys and
    /// values are form-encoded during appending.
    #[must_use]
    pub fn into_request(self, base: &url::Url) -> HttpRequest {
        let mut url = base.clone();
        url.set_path(&join_path(base.path(), &self.sub_path));
        if !self.query.is_empty() {
            // Scoped so the serializer releases its borrow on the URL.
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        let mut request = HttpRequest::new(self.method, url);
        request.body = self.body;
        request
    }
}

/// Joins `sub` onto `base` with POSIX path semantics: single slashes between
/// segments, `.` segments dropped, `..` segments popping back, and a leading
/// slash always present. The empty result collapses to `/`.
fn join_path(base: &str, sub: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(sub.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return "/".to_string();
    }
    let mut path = String::new();
    for segment in &segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}
