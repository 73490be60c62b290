// Feed source trait — the swap-ready abstraction over feed transport.
//
// The default implementation fetches over HTTP. Tests drive the collector
// with canned XML instead of the network.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

/// Transport for raw feed bodies. Implementations must be async because the
/// default source performs HTTP requests.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw XML body of one feed.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP feed source — a thin reqwest wrapper with status checking.
pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("groundswell/0.1 (trend-detection)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = url, "Fetching feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Feed request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Feed {url} returned {status}");
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read feed body: {url}"))
    }
}
