//! HTTP client for the users endpoint. The fetch is bounded by the configured
//! timeout and never retried; every failure is mapped into a [`FetchError`] the
//! view can display.

use crate::{config::AppConfig, errors::FetchError, users::types::User};
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use std::{future::Future, time::Duration};
use tokio::time::timeout;
use tracing::{debug, info_span, Instrument};

/// Path of the users collection, relative to the API base URL.
pub const USERS_PATH: &str = "/api/users";

/// Anything that can produce the users list. The component only talks to this
/// trait, which keeps it independent from the transport.
pub trait UserSource: Send + Sync + 'static {
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;
}

#[derive(Clone, Debug)]
pub struct UsersClient {
    http: Client,
    url: String,
    timeout: Duration,
}

impl UsersClient {
    /// Build a client for the users endpoint under `config.base_url`.
    ///
    /// # Errors
    /// Returns `FetchError::Config` if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let url = config.endpoint_url(USERS_PATH)?;
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|err| FetchError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            url,
            timeout: config.timeout,
        })
    }

    /// Absolute URL this client requests.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<User>, FetchError> {
        let span = info_span!(
            "users.list",
            http.method = "GET",
            url = %self.url
        );
        let response = self
            .http
            .get(&self.url)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }
}

impl UserSource for UsersClient {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        let users = timeout(self.timeout, self.fetch())
            .await
            .map_err(|_| FetchError::Timeout)??;

        debug!(count = users.len(), "fetched users");

        Ok(users)
    }
}

/// Maps transport failures into user-facing variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err.to_string())
    }
}

/// Rejects non-success statuses, then decodes the body as a list of users.
async fn handle_json_response(response: Response) -> Result<Vec<User>, FetchError> {
    let status = response.status();
    if !status.is_success() {
        // hyper only records the phrase when it differs from the canonical one.
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        return Err(FetchError::from_status(status, reason.as_deref()));
    }

    let body = response.bytes().await.map_err(map_request_error)?;

    serde_json::from_slice(&body).map_err(|err| FetchError::Parse(err.to_string()))
}
