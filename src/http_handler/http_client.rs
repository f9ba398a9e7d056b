use super::http_request::request_common::HTTPRequestMethod;
use crate::session::Session;
use std::sync::Arc;

/// A thin wrapper around `reqwest::Client` used to issue requests against the
/// ground-control backend with a preconfigured base URL and session.
///
/// Endpoint paths are appended to the base URL verbatim. The client imposes
/// no timeout of its own; timeout behavior is whatever the underlying
/// transport provides.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Authentication state consulted whenever request headers are built.
    session: Arc<Session>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` for the given base URL and session.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8000"`).
    /// * `session` – The session supplying the bearer token.
    pub fn new(base_url: &str, session: Arc<Session>) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::new(),
            base_url: String::from(base_url),
            session,
        }
    }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    /// Returns the session backing this client.
    pub fn session(&self) -> &Session { &self.session }

    /// Prepares a request for `endpoint` with the standing headers: JSON
    /// content type on every request, bearer authorization only when the
    /// session currently holds a token.
    pub(crate) fn request_builder(
        &self,
        method: HTTPRequestMethod,
        endpoint: &str,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut builder = self
            .client
            .request(method.into(), url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}
