use factcheck_search::{SearchChain, SearchQuery, SearchResult};

use crate::document::RetrievedDocument;
use crate::filter::filter_results;
use crate::language::Language;
use crate::query::{fallback_query, optimize, question_query};
use crate::summarizer::truncate_chars;

const DIGEST_RESULTS: usize = 2;
const DIGEST_BODY_CHARS: usize = 150;

/// Optional web corroboration appended below the knowledge-base summary.
#[derive(Debug, Clone, Default)]
pub struct WebSearchSupplement {
    enabled: bool,
    chain: SearchChain,
}

impl WebSearchSupplement {
    #[must_use]
    pub fn new(enabled: bool, chain: SearchChain) -> Self {
        Self { enabled, chain }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Search the web and format a short digest. `None` when disabled or when no
    /// provider returned relevant results.
    pub async fn supplement(
        &self,
        question: &str,
        documents: &[RetrievedDocument],
        language: Language,
    ) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let keywords = if documents.is_empty() {
            fallback_query(question)
        } else {
            let q = optimize(question, documents);
            tracing::info!(query = %q, "optimized web search query");
            q
        };
        let query = SearchQuery::new(keywords, question_query(question));

        match self
            .chain
            .search(&query, |raw| filter_results(raw, question))
            .await
        {
            Ok(hit) => Some(format_digest(&hit.results, language)),
            Err(e) => {
                tracing::warn!(error = %e, "web search supplement unavailable");
                None
            }
        }
    }
}

/// Numbered digest of the top results under a localized header.
#[must_use]
pub fn format_digest(results: &[SearchResult], language: Language) -> String {
    let mut digest = format!("{}\n\n", language.web_header());
    for (i, result) in results.iter().take(DIGEST_RESULTS).enumerate() {
        let title = if result.title.is_empty() {
            "Unknown"
        } else {
            result.title.as_str()
        };
        digest.push_str(&format!(
            "{}. **{title}**\n   {}...\n   🔗 {}\n\n",
            i + 1,
            truncate_chars(&result.body, DIGEST_BODY_CHARS),
            result.url
        ));
    }
    digest.trim().to_owned()
}
