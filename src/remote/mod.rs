use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info};

mod error;
mod schema;

pub use error::RemoteError;
pub use schema::{SearchItem, SearchResponse};

use crate::config::RemoteConfig;
use crate::solution::Solution;

pub const DEFAULT_API_URL: &str = "https://api.stackexchange.com/2.3/search/advanced";
pub const DEFAULT_SITE: &str = "stackoverflow";

/// A knowledge base that can be searched for questions matching an error.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, RemoteError>;
}

/// Stack Exchange search restricted to questions with an accepted answer.
pub struct StackExchangeBackend {
    client: reqwest::Client,
    api_url: String,
    site: String,
}

impl StackExchangeBackend {
    pub fn new(api_url: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            site: site.into(),
        }
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(&config.api_url, &config.site)
    }
}

impl Default for StackExchangeBackend {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_SITE)
    }
}

#[async_trait]
impl SearchBackend for StackExchangeBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse, RemoteError> {
        info!(url = %self.api_url, site = %self.site, "searching knowledge base");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("order", "desc"),
                ("sort", "relevance"),
                ("q", query),
                ("site", self.site.as_str()),
                ("accepted", "True"),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => (),
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(RemoteError::RateLimitError("Rate limit exceeded".to_string()));
            }
            status => {
                let error_body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Could not read error response".to_string());
                return Err(RemoteError::APIError(format!(
                    "Unexpected status code: {} - Response: {}",
                    status, error_body
                )));
            }
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| RemoteError::NetworkError(format!("Failed to read response body: {}", e)))?;

        let parsed: SearchResponse = serde_json::from_str(&response_text)?;
        debug!(
            items = parsed.items.len(),
            quota_remaining = ?parsed.quota_remaining,
            "received search response"
        );

        Ok(parsed)
    }
}

/// Answers an error by asking a remote knowledge base instead of the local rules.
pub struct RemoteClassifier {
    backend: Box<dyn SearchBackend>,
}

impl RemoteClassifier {
    pub fn new(backend: impl SearchBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(StackExchangeBackend::from_config(config))
    }

    /// Top accepted hit for the error text, `None` when the search came back empty.
    pub async fn lookup(&self, error_text: &str) -> Result<Option<SearchItem>, RemoteError> {
        self.backend.search(error_text).await?.into_top_item()
    }

    /// Never fails: transport and shape problems become the "API Error" solution.
    pub async fn classify_remote(&self, error_text: &str) -> Solution {
        match self.lookup(error_text).await {
            Ok(Some(item)) => Solution::from_search_hit(&item.title, &item.link),
            Ok(None) => Solution::no_solution_found(),
            Err(e) => {
                tracing::error!(error = %e, "error fetching StackOverflow");
                Solution::api_error()
            }
        }
    }
}

impl Default for RemoteClassifier {
    fn default() -> Self {
        Self::new(StackExchangeBackend::default())
    }
}
