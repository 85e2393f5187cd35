//! Changelog retrieval layer
//!
//! The core pipeline only ever sees a decoded text blob; everything about
//! how that blob is obtained lives behind [`ChangelogFetcher`].
//!
//! - firecrawl.rs: Firecrawl scrape API client

pub mod firecrawl;

pub use firecrawl::FirecrawlFetcher;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication rejected by scrape API")]
    Unauthorized,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for retrieving a changelog document as markdown text
#[async_trait::async_trait]
pub trait ChangelogFetcher: Send + Sync {
    /// Fetch the document at `url` and return its markdown body.
    /// An empty body is not an error here; the extractor reports it.
    async fn fetch_markdown(&self, url: &str) -> Result<String, FetchError>;
}
