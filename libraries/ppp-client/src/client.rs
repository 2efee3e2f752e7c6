//! Main PPP client.

use crate::albums::AlbumClient;
use crate::error::{ClientError, Result};
use crate::operation::{ResponseFormat, Route};
use crate::result::{ApiResult, Payload};
use crate::types::ClientConfig;
use crate::users::UserClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the PPP users and albums backend.
///
/// The base address is fixed at construction. An application builds one
/// client at startup, wraps it in an `Arc` and hands it to whatever needs
/// it; the client is never rebuilt or reset for the life of the process.
///
/// # Example
///
/// ```ignore
/// use ppp_client::{ClientConfig, PppClient, User};
///
/// let client = PppClient::new(ClientConfig::new("http://localhost:8080"))?;
///
/// let created = client.users().add_user(&User::new("a", "b")).await;
/// let fetched = client.users().get_user_by_username("a").await;
/// let user: User = fetched.decode()?;
/// ```
pub struct PppClient {
    http: Client,
    base: Url,
    base_url: String,
}

impl PppClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base = Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{} cannot be used as a base address",
                base_url
            )));
        }

        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Request)?;

        debug!(base_url = %base_url, "Created PPP client");

        Ok(Self {
            http,
            base,
            base_url,
        })
    }

    /// The normalized base address, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// User operations.
    pub fn users(&self) -> UserClient<'_> {
        UserClient::new(self)
    }

    /// Album operations.
    pub fn albums(&self) -> AlbumClient<'_> {
        AlbumClient::new(self)
    }

    /// Full URL of a route, with each path segment percent-encoded.
    ///
    /// `.` and `..` are refused: they would be resolved away and the request
    /// would land on a different endpoint.
    pub fn url_for(&self, route: &Route) -> Result<Url> {
        if let Some(segment) = route
            .segments()
            .iter()
            .find(|segment| matches!(segment.as_str(), "." | ".."))
        {
            return Err(ClientError::InvalidUrl(format!(
                "path segment {:?} in {} cannot be sent",
                segment,
                route.path()
            )));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(route.segments());
        Ok(url)
    }

    /// Perform a bodiless request.
    pub(crate) async fn execute(&self, route: Route) -> ApiResult {
        self.dispatch(route, None).await
    }

    /// Perform a request carrying `body` as JSON.
    pub(crate) async fn execute_with_body<B>(&self, route: Route, body: &B) -> ApiResult
    where
        B: Serialize + ?Sized,
    {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.dispatch(route, Some(bytes)).await,
            Err(e) => {
                let err = ClientError::from(e);
                warn!(operation = %route.operation(), error = %err, "Failed to encode request body");
                ApiResult::from_error(route.operation(), &err)
            }
        }
    }

    async fn dispatch(&self, route: Route, body: Option<Vec<u8>>) -> ApiResult {
        let operation = route.operation();

        match self.send(&route, body).await {
            Ok((status, payload)) => ApiResult::Ok {
                status: status.as_u16(),
                payload,
            },
            Err(err) => {
                warn!(
                    operation = %operation,
                    path = %route.path(),
                    error = %err,
                    "{}",
                    operation.failure_message()
                );
                ApiResult::from_error(operation, &err)
            }
        }
    }

    async fn send(&self, route: &Route, body: Option<Vec<u8>>) -> Result<(StatusCode, Payload)> {
        let operation = route.operation();
        let url = self.url_for(route)?;

        debug!(operation = %operation, method = %operation.method(), url = %url, "Sending request");

        let mut request = self.http.request(operation.method(), url);
        if let Some(body) = body {
            request = request
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(ClientError::from_transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ClientError::from_transport)?;

        if status.is_success() {
            info!(operation = %operation, status = status.as_u16(), "Response received");
        } else {
            // Error bodies are handed back unchanged; the caller inspects them
            warn!(operation = %operation, status = %status, body = %text, "Server returned an error status");
        }

        let payload = match operation.response_format() {
            ResponseFormat::Json => {
                let value = serde_json::from_str(&text).map_err(|e| {
                    ClientError::ParseError(format!("Failed to parse {} response: {}", operation, e))
                })?;
                Payload::Json(value)
            }
            ResponseFormat::Text => Payload::Text(text),
        };

        Ok((status, payload))
    }
}
