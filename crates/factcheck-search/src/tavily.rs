use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{TavilyConfig, is_valid_tavily_key};
use crate::error::SearchError;
use crate::provider::{QueryStyle, SearchProvider, SearchResult};

const PROVIDER_NAME: &str = "tavily";

/// Tavily search API client.
pub struct TavilyProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    max_results: usize,
    search_depth: String,
}

impl fmt::Debug for TavilyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TavilyProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("max_results", &self.max_results)
            .field("search_depth", &self.search_depth)
            .finish_non_exhaustive()
    }
}

impl Clone for TavilyProvider {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            max_results: self.max_results,
            search_depth: self.search_depth.clone(),
        }
    }
}

impl TavilyProvider {
    #[must_use]
    pub fn new(api_key: String, config: &TavilyConfig, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        let mut base_url = config.base_url.clone();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client,
            api_key,
            base_url,
            max_results: config.max_results,
            search_depth: config.search_depth.clone(),
        }
    }
}

impl SearchProvider for TavilyProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        if !is_valid_tavily_key(&self.api_key) {
            return Err(SearchError::MissingCredentials {
                provider: PROVIDER_NAME.to_owned(),
            });
        }

        let body = TavilyRequest {
            query,
            max_results: self.max_results,
            search_depth: &self.search_depth,
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!("tavily error {status}: {text}");
            return Err(SearchError::Status {
                provider: PROVIDER_NAME.to_owned(),
                status: status.as_u16(),
            });
        }

        let resp: TavilyResponse = serde_json::from_str(&text)?;
        Ok(resp.results.into_iter().take(self.max_results).collect())
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn query_style(&self) -> QueryStyle {
        QueryStyle::Question
    }
}

#[derive(Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    max_results: usize,
    search_depth: &'a str,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}
