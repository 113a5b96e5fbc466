#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{provider} returned HTTP {status}")]
    Status { provider: String, status: u16 },

    #[error("failed to parse {provider} results: {message}")]
    Parse { provider: String, message: String },

    #[error("missing credentials for {provider}")]
    MissingCredentials { provider: String },

    #[error("all search providers failed or returned no relevant results")]
    Exhausted,
}
