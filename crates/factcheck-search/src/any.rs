#[cfg(feature = "duckduckgo")]
use crate::duckduckgo::DuckDuckGoProvider;
use crate::error::SearchError;
#[cfg(any(test, feature = "mock"))]
use crate::mock::MockSearchProvider;
use crate::provider::{QueryStyle, SearchProvider, SearchResult};
#[cfg(feature = "tavily")]
use crate::tavily::TavilyProvider;

/// Generates a match over all `AnySearchProvider` variants, binding the inner provider
/// and evaluating the given expression for each arm.
macro_rules! delegate_search {
    ($self:expr, |$p:ident| $expr:expr) => {
        match *$self {
            #[cfg(feature = "duckduckgo")]
            AnySearchProvider::DuckDuckGo(ref $p) => $expr,
            #[cfg(feature = "tavily")]
            AnySearchProvider::Tavily(ref $p) => $expr,
            #[cfg(any(test, feature = "mock"))]
            AnySearchProvider::Mock(ref $p) => $expr,
        }
    };
}

#[derive(Debug, Clone)]
pub enum AnySearchProvider {
    #[cfg(feature = "duckduckgo")]
    DuckDuckGo(DuckDuckGoProvider),
    #[cfg(feature = "tavily")]
    Tavily(TavilyProvider),
    #[cfg(any(test, feature = "mock"))]
    Mock(MockSearchProvider),
}

impl SearchProvider for AnySearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        delegate_search!(self, |p| p.search(query).await)
    }

    fn name(&self) -> &str {
        delegate_search!(self, |p| p.name())
    }

    fn query_style(&self) -> QueryStyle {
        delegate_search!(self, |p| p.query_style())
    }
}

#[cfg(feature = "duckduckgo")]
impl From<DuckDuckGoProvider> for AnySearchProvider {
    fn from(p: DuckDuckGoProvider) -> Self {
        Self::DuckDuckGo(p)
    }
}

#[cfg(feature = "tavily")]
impl From<TavilyProvider> for AnySearchProvider {
    fn from(p: TavilyProvider) -> Self {
        Self::Tavily(p)
    }
}

#[cfg(any(test, feature = "mock"))]
impl From<MockSearchProvider> for AnySearchProvider {
    fn from(p: MockSearchProvider) -> Self {
        Self::Mock(p)
    }
}
