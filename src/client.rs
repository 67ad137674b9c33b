//! Postlane API client.
//!
//! Low-level HTTP client that handles authentication, envelope decoding and
//! error mapping. Higher-level operations are implemented via traits on
//! entity types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::envelope::ErrorEnvelope;
use crate::error::{PostlaneError, RequestError, Result, UNKNOWN_REASON};

/// Production API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.postlane.com/v1";

/// Upper bound on a single round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest response body the client will buffer (100 MiB).
pub const MAX_RESPONSE_BYTES: usize = 100 * 1024 * 1024;

const CLIENT_ID: &str = concat!("postlane-rust/", env!("CARGO_PKG_VERSION"));

/// Low-level Postlane API client.
///
/// Handles authentication and HTTP requests. Entity-specific operations
/// are implemented via the `Create`, `Update`, `Delete` and `List` traits
/// on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use postlane::PostlaneClient;
///
/// # fn example() -> postlane::Result<()> {
/// // Create from environment variables
/// let client = PostlaneClient::from_env()?;
///
/// // Or configure manually
/// let client = PostlaneClient::new("your-api-key", "https://api.postlane.com/v1")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PostlaneClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
}

impl std::fmt::Debug for PostlaneClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostlaneClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PostlaneClient {
    /// Create a client from environment variables.
    ///
    /// Uses `POSTLANE_API_KEY` for authentication and optionally
    /// `POSTLANE_API_URL` for the base URL (defaults to
    /// `https://api.postlane.com/v1`).
    ///
    /// # Errors
    ///
    /// Returns an error if `POSTLANE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("POSTLANE_API_KEY").map_err(|_| {
            PostlaneError::ConfigMissing("POSTLANE_API_KEY environment variable not set".to_string())
        })?;

        let base_url =
            env::var("POSTLANE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&api_key, &base_url)
    }

    /// Create a new client with the provided API key and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(CLIENT_ID)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PostlaneError::Transport)?;

        Self::with_http_client(api_key, base_url, http)
    }

    /// Create a client on top of an existing `reqwest::Client`.
    ///
    /// The connection pool is shared with the caller. The request timeout and
    /// identifying header are still applied per request.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_http_client(api_key: &str, base_url: &str, http: Client) -> Result<Self> {
        // Paths are joined relative to the base, so it must end with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an authenticated request for `path` relative to the base URL.
    ///
    /// Attach a body with [`RequestBuilder::json`], which also sets
    /// `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not form a valid URL.
    pub fn build_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;

        Ok(self
            .http
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(USER_AGENT, CLIENT_ID)
            .timeout(REQUEST_TIMEOUT))
    }

    /// Send a request and decode the success body as `T`.
    ///
    /// # Errors
    ///
    /// - [`PostlaneError::Request`] for any non-2xx status whose body was read
    /// - [`PostlaneError::Decode`] if a 2xx body does not match `T`
    /// - [`PostlaneError::Timeout`], [`PostlaneError::Transport`] or
    ///   [`PostlaneError::ResponseTooLarge`] for transport failures
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            // Read failures stay transport errors; only an undecodable body
            // falls back to the unknown reason.
            let body = read_body(response, MAX_RESPONSE_BYTES).await?;
            return Err(Self::request_error(status, &body).into());
        }

        let body = read_body(response, MAX_RESPONSE_BYTES).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::GET, path)?.query(query);
        self.execute(request).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::POST, path)?.json(body);
        self.execute(request).await
    }

    /// Make a PATCH request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::PATCH, path)?.json(body);
        self.execute(request).await
    }

    /// Map a failed response to a [`RequestError`].
    fn request_error(status: StatusCode, body: &[u8]) -> RequestError {
        let reason = serde_json::from_slice::<ErrorEnvelope>(body)
            .map(|envelope| envelope.reason)
            .unwrap_or_else(|_| UNKNOWN_REASON.to_string());

        RequestError::new(status.as_u16(), reason)
    }
}

/// Buffer a response body, refusing anything larger than `limit` bytes.
async fn read_body(mut response: Response, limit: usize) -> Result<Vec<u8>> {
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(PostlaneError::ResponseTooLarge { limit });
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > limit {
            return Err(PostlaneError::ResponseTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_debug() {
        let client = PostlaneClient::new("test-token", DEFAULT_API_URL).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("PostlaneClient"));
        assert!(debug.contains("base_url"));
        // API key should not be in debug output
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = PostlaneClient::new("token", "https://api.postlane.com/v1").unwrap();
        let client2 = PostlaneClient::new("token", "https://api.postlane.com/v1/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_build_request_headers_and_url() {
        let client = PostlaneClient::new("test-token", DEFAULT_API_URL).unwrap();
        let request = client
            .build_request(Method::POST, "contacts")
            .unwrap()
            .json(&serde_json::json!({"email": "a@example.com"}))
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "https://api.postlane.com/v1/contacts");
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.timeout(), Some(&REQUEST_TIMEOUT));

        let headers = request.headers();
        assert_eq!(headers["authorization"], "Bearer test-token");
        assert_eq!(headers["content-type"], "application/json");
        assert!(headers["user-agent"]
            .to_str()
            .unwrap()
            .starts_with("postlane-rust/"));
    }

    #[test]
    fn test_build_request_without_body_has_no_content_type() {
        let client = PostlaneClient::new("test-token", DEFAULT_API_URL).unwrap();
        let request = client
            .build_request(Method::GET, "lists")
            .unwrap()
            .build()
            .unwrap();

        assert!(request.headers().get("content-type").is_none());
    }

    #[tokio::test]
    async fn test_read_body_rejects_oversized_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/big"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
            .mount(&server)
            .await;

        let response = reqwest::get(format!("{}/big", server.uri())).await.unwrap();
        let err = read_body(response, 16).await.unwrap_err();

        assert!(matches!(err, PostlaneError::ResponseTooLarge { limit: 16 }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_read_body_within_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/small"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let response = reqwest::get(format!("{}/small", server.uri())).await.unwrap();
        let body = read_body(response, 16).await.unwrap();

        assert_eq!(body, b"hello");
    }

    #[test]
    fn test_request_error_falls_back_to_unknown_reason() {
        let err = PostlaneClient::request_error(StatusCode::BAD_GATEWAY, b"<html>");
        assert_eq!(err, RequestError::new(502, UNKNOWN_REASON));

        let err = PostlaneClient::request_error(StatusCode::BAD_GATEWAY, b"");
        assert_eq!(err, RequestError::new(502, UNKNOWN_REASON));
    }
}
