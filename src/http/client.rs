//! HTTP client performing single, unretried GET requests.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("inmostore/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed HTTP exchange.
///
/// The body is only read for `200 OK`; other statuses carry an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            body: body.into(),
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET and returns whatever status the server answered with.
    /// Errors only when no HTTP response was obtained at all.
    async fn get(&self, url: &str) -> Result<Reply>;
}

/// Transport backed by a reqwest Client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpClient {
    // The URL carries the API key, keep it out of span fields.
    #[tracing::instrument(skip_all)]
    async fn get(&self, url: &str) -> Result<Reply> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("GET answered with {}", status);

        if status != StatusCode::OK {
            return Ok(Reply::with_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(Reply::ok(body))
    }
}

/// Build an HTTP client without custom headers or timeouts.
pub fn build_http_client(user_agent: &str) -> Result<HttpClient> {
    let client = Client::builder()
        .user_agent(user_agent.to_string())
        .build()
        .context("Failed to build HTTP client")?;

    Ok(HttpClient::new(client))
}
