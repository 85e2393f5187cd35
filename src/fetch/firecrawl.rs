//! Firecrawl scrape API client

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::FETCH_TIMEOUT_MS;
use crate::fetch::{ChangelogFetcher, FetchError};

/// Default base URL for the Firecrawl API
const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";

/// Request body for the scrape endpoint
#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: &'a [&'a str],
}

/// Response from the scrape endpoint
#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    data: ScrapeData,
}

#[derive(Debug, Deserialize, Default)]
struct ScrapeData {
    #[serde(default)]
    markdown: Option<String>,
}

/// Fetcher implementation backed by the Firecrawl scrape API
pub struct FirecrawlFetcher {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FirecrawlFetcher {
    /// Creates a fetcher against the production Firecrawl API
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a fetcher with a custom base URL
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("changelog-scan")
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ChangelogFetcher for FirecrawlFetcher {
    async fn fetch_markdown(&self, url: &str) -> Result<String, FetchError> {
        let endpoint = format!("{}/v1/scrape", self.base_url);

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&ScrapeRequest {
                url,
                formats: &["markdown"],
            })
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(FetchError::Unauthorized);
        }

        if !status.is_success() {
            warn!("scrape API returned status {}: {}", status, endpoint);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let scraped: ScrapeResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse scrape API response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(scraped.data.markdown.unwrap_or_default())
    }
}
