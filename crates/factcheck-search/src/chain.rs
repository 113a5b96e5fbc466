use crate::any::AnySearchProvider;
use crate::config::{SearchConfig, SearchProviderKind, is_valid_tavily_key};
#[cfg(feature = "duckduckgo")]
use crate::duckduckgo::DuckDuckGoProvider;
use crate::error::SearchError;
use crate::provider::{SearchProvider, SearchQuery, SearchResult};
#[cfg(feature = "tavily")]
use crate::tavily::TavilyProvider;

/// Results accepted from the first provider that produced any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHit {
    pub provider: String,
    pub raw_count: usize,
    pub results: Vec<SearchResult>,
}

/// Ordered list of search backends, tried one after another until a backend
/// yields results that survive the caller's filter.
#[derive(Debug, Clone, Default)]
pub struct SearchChain {
    providers: Vec<AnySearchProvider>,
}

impl SearchChain {
    #[must_use]
    pub fn new(providers: Vec<AnySearchProvider>) -> Self {
        Self { providers }
    }

    /// Build the provider order from configuration.
    ///
    /// `duckduckgo` tries DuckDuckGo first and Tavily second; `tavily` tries only
    /// Tavily. Tavily is included only with a usable API key.
    #[must_use]
    pub fn from_config(config: &SearchConfig, tavily_api_key: Option<&str>) -> Self {
        let mut providers = Vec::new();

        if config.provider == SearchProviderKind::DuckDuckGo {
            #[cfg(feature = "duckduckgo")]
            {
                providers.push(
                    DuckDuckGoProvider::new(&config.duckduckgo, config.timeout).into(),
                );
            }
            #[cfg(not(feature = "duckduckgo"))]
            {
                tracing::warn!("duckduckgo backend not compiled in, skipping");
            }
        }

        match tavily_api_key.filter(|key| is_valid_tavily_key(key)) {
            Some(key) => {
                #[cfg(feature = "tavily")]
                {
                    providers.push(
                        TavilyProvider::new(key.trim().to_owned(), &config.tavily, config.timeout)
                            .into(),
                    );
                }
                #[cfg(not(feature = "tavily"))]
                {
                    let _ = key;
                    tracing::warn!("tavily backend not compiled in, skipping");
                }
            }
            None => tracing::debug!("tavily api key missing or placeholder, skipping tavily"),
        }

        Self { providers }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(SearchProvider::name).collect()
    }

    /// Query each provider once, in order, with the form of `query` it asks for,
    /// passing its raw results through `accept`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Exhausted`] when every provider failed or nothing
    /// survived `accept`.
    pub async fn search<F>(
        &self,
        query: &SearchQuery,
        mut accept: F,
    ) -> Result<ChainHit, SearchError>
    where
        F: FnMut(Vec<SearchResult>) -> Vec<SearchResult>,
    {
        for p in &self.providers {
            let text = query.for_style(p.query_style());
            tracing::debug!(provider = p.name(), query = text, "web search");
            match p.search(text).await {
                Ok(raw) => {
                    let raw_count = raw.len();
                    let results = accept(raw);
                    tracing::info!(
                        provider = p.name(),
                        raw = raw_count,
                        kept = results.len(),
                        "search results filtered"
                    );
                    if !results.is_empty() {
                        return Ok(ChainHit {
                            provider: p.name().to_owned(),
                            raw_count,
                            results,
                        });
                    }
                }
                Err(e) => {
                    tracing::warn!(provider = p.name(), error = %e, "search fallback");
                }
            }
        }
        Err(SearchError::Exhausted)
    }
}
