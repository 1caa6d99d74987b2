use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Port for the HTTP layer that issues the POST and returns the raw
/// response body. The gateway only ever needs this one call; tests swap in
/// [`CannedTransport`] to drive the normalization path with fixture
/// documents.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, body: String) -> Result<String>;
}

pub type TransportBox = Box<dyn Transport>;

/// Reqwest-backed transport used against the real provider endpoints.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Uses a caller-configured client (proxies, custom TLS, timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "text/xml")
            .timeout(Duration::from_secs(60))
            .body(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Transport that returns a fixed body, standing in for the provider in
/// tests the way the original suite stubbed its socket layer.
pub struct CannedTransport {
    body: String,
}

impl CannedTransport {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn post(&self, _url: &str, _body: String) -> Result<String> {
        Ok(self.body.clone())
    }
}
