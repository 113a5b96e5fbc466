//! Web search backends and the ordered fallback chain that drives them.

pub mod any;
pub mod chain;
pub mod config;
#[cfg(feature = "duckduckgo")]
pub mod duckduckgo;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod provider;
#[cfg(feature = "tavily")]
pub mod tavily;

pub use any::AnySearchProvider;
pub use chain::{ChainHit, SearchChain};
pub use config::{
    DuckDuckGoConfig, SearchConfig, SearchProviderKind, TAVILY_PLACEHOLDER_KEY, TavilyConfig,
    is_valid_tavily_key,
};
pub use error::SearchError;
pub use provider::{QueryStyle, SearchProvider, SearchQuery, SearchResult};
