use std::sync::{Arc, Mutex};

use crate::error::SearchError;
use crate::provider::{QueryStyle, SearchProvider, SearchResult};

/// Scripted search backend for tests. Clones share the recorded query log.
#[derive(Debug, Clone)]
pub struct MockSearchProvider {
    name: String,
    results: Vec<SearchResult>,
    fail: bool,
    style: QueryStyle,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearchProvider {
    #[must_use]
    pub fn returning(name: impl Into<String>, results: Vec<SearchResult>) -> Self {
        Self {
            name: name.into(),
            results,
            fail: false,
            style: QueryStyle::Keywords,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            fail: true,
            ..Self::returning(name, Vec::new())
        }
    }

    #[must_use]
    pub fn with_query_style(mut self, style: QueryStyle) -> Self {
        self.style = style;
        self
    }

    /// Queries received so far, in call order.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        if let Ok(mut q) = self.queries.lock() {
            q.push(query.to_owned());
        }
        if self.fail {
            return Err(SearchError::Status {
                provider: self.name.clone(),
                status: 500,
            });
        }
        Ok(self.results.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn query_style(&self) -> QueryStyle {
        self.style
    }
}
