use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// One web search hit.
///
/// Accepts both the `body`/`href` shape (DuckDuckGo style) and the
/// `content`/`url` shape (Tavily style).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub body: String,
    #[serde(default, alias = "href")]
    pub url: String,
}

impl SearchResult {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            url: url.into(),
        }
    }
}

/// Which form of a [`SearchQuery`] a backend is sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryStyle {
    /// Keyword string derived from the retrieved documents.
    #[default]
    Keywords,
    /// Topic prefix plus the user's own question.
    Question,
}

/// One search request in both forms the backends understand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub keywords: String,
    pub question: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(keywords: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            question: question.into(),
        }
    }

    /// Same text for every backend.
    #[must_use]
    pub fn uniform(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            keywords: query.clone(),
            question: query,
        }
    }

    #[must_use]
    pub fn for_style(&self, style: QueryStyle) -> &str {
        match style {
            QueryStyle::Keywords => &self.keywords,
            QueryStyle::Question => &self.question,
        }
    }
}

pub trait SearchProvider: Send + Sync {
    /// Run a single search round-trip for `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable, rejects the request,
    /// or answers with something that cannot be parsed.
    fn search(&self, query: &str)
    -> impl Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    fn name(&self) -> &str;

    /// Query form this backend ranks best with.
    fn query_style(&self) -> QueryStyle {
        QueryStyle::Keywords
    }
}
