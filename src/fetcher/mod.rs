pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

use async_trait::async_trait;
use std::time::Duration;

pub use client::{fetch, validate_url};
pub use errors::FetchError;
pub use types::{Charset, FetchResult};

/// Source of raw page HTML. The orchestrator only sees this seam so tests can
/// swap the network out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError>;
}

/// Fetches over HTTP with a fixed deadline per request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        fetch(url, self.timeout).await
    }
}
