use std::time::Duration;

use url::Url;

use crate::config::DuckDuckGoConfig;
use crate::error::SearchError;
use crate::provider::{SearchProvider, SearchResult};

const PROVIDER_NAME: &str = "duckduckgo";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Searches through the DuckDuckGo HTML endpoint, which needs no API key.
///
/// Result blocks are parsed with `scrape-core`; redirect links of the form
/// `//duckduckgo.com/l/?uddg=<encoded>` are unwrapped to the destination URL.
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    client: reqwest::Client,
    base_url: String,
    max_results: usize,
}

impl DuckDuckGoProvider {
    #[must_use]
    pub fn new(config: &DuckDuckGoConfig, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(3))
            .build()
            .unwrap_or_default();

        let mut base_url = config.base_url.clone();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client,
            base_url,
            max_results: config.max_results,
        }
    }

    async fn fetch_html(&self, query: &str) -> Result<String, SearchError> {
        let url = Url::parse_with_params(&format!("{}/html/", self.base_url), &[("q", query)])?;

        let resp = self
            .client
            .get(url)
            .header("Accept", "text/html")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                provider: PROVIDER_NAME.to_owned(),
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}

impl SearchProvider for DuckDuckGoProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let html = self.fetch_html(query).await?;
        parse_results(&html, self.max_results)
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}

fn parse_error(e: impl std::fmt::Display) -> SearchError {
    SearchError::Parse {
        provider: PROVIDER_NAME.to_owned(),
        message: format!("invalid selector: {e}"),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchResult>, SearchError> {
    let soup = scrape_core::Soup::parse(html);
    let blocks = soup.find_all(".result").map_err(parse_error)?;

    let mut results = Vec::new();
    for block in blocks {
        if results.len() >= max_results {
            break;
        }
        let fragment = scrape_core::Soup::parse(&block.inner_html());

        let Some(link) = fragment
            .find_all("a.result__a")
            .map_err(parse_error)?
            .into_iter()
            .next()
        else {
            continue;
        };

        let title = collapse_whitespace(&link.text());
        let url = resolve_result_url(link.get("href").unwrap_or_default());
        // sponsored entries route through the ad click tracker
        if title.is_empty() || url.contains("duckduckgo.com/y.js") {
            continue;
        }

        let body = fragment
            .find_all(".result__snippet")
            .map_err(parse_error)?
            .into_iter()
            .next()
            .map(|snippet| collapse_whitespace(&snippet.text()))
            .unwrap_or_default();

        results.push(SearchResult { title, body, url });
    }

    Ok(results)
}

fn resolve_result_url(href: &str) -> String {
    let Ok(base) = Url::parse("https://duckduckgo.com/") else {
        return href.to_owned();
    };
    base.join(href)
        .ok()
        .and_then(|parsed| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        })
        .filter(|target| !target.is_empty())
        .unwrap_or_else(|| href.to_owned())
}
