use serde::{Deserialize, Serialize};

/// Search backend the supplement starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProviderKind {
    #[default]
    DuckDuckGo,
    Tavily,
}

impl SearchProviderKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DuckDuckGo => "duckduckgo",
            Self::Tavily => "tavily",
        }
    }
}

impl std::fmt::Display for SearchProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duckduckgo" => Ok(Self::DuckDuckGo),
            "tavily" => Ok(Self::Tavily),
            other => Err(format!("unknown search provider: {other}")),
        }
    }
}

fn default_timeout() -> u64 {
    15
}

/// Web search configuration. Disabled unless explicitly turned on.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub provider: SearchProviderKind,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub duckduckgo: DuckDuckGoConfig,
    #[serde(default)]
    pub tavily: TavilyConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: SearchProviderKind::default(),
            timeout: default_timeout(),
            duckduckgo: DuckDuckGoConfig::default(),
            tavily: TavilyConfig::default(),
        }
    }
}

fn default_duckduckgo_url() -> String {
    "https://html.duckduckgo.com".into()
}

fn default_duckduckgo_max_results() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DuckDuckGoConfig {
    #[serde(default = "default_duckduckgo_url")]
    pub base_url: String,
    #[serde(default = "default_duckduckgo_max_results")]
    pub max_results: usize,
}

impl Default for DuckDuckGoConfig {
    fn default() -> Self {
        Self {
            base_url: default_duckduckgo_url(),
            max_results: default_duckduckgo_max_results(),
        }
    }
}

/// Value shipped in sample environment files; never a usable key.
pub const TAVILY_PLACEHOLDER_KEY: &str = "tvly-your-api-key";

/// A Tavily key is usable when it is non-empty and not the sample placeholder.
#[must_use]
pub fn is_valid_tavily_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != TAVILY_PLACEHOLDER_KEY
}

fn default_tavily_url() -> String {
    "https://api.tavily.com".into()
}

fn default_tavily_max_results() -> usize {
    2
}

fn default_search_depth() -> String {
    "basic".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TavilyConfig {
    #[serde(default = "default_tavily_url")]
    pub base_url: String,
    #[serde(default = "default_tavily_max_results")]
    pub max_results: usize,
    #[serde(default = "default_search_depth")]
    pub search_depth: String,
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            base_url: default_tavily_url(),
            max_results: default_tavily_max_results(),
            search_depth: default_search_depth(),
        }
    }
}
