//! Fact-check pipeline: summarize retrieved monk seal literature, optionally
//! corroborate it with a web search, and assemble the final block.

pub mod assembler;
pub mod citation;
pub mod config;
pub mod document;
pub mod filter;
pub mod language;
pub mod query;
pub mod summarizer;
pub mod supplement;
pub mod vault;

use factcheck_llm::LlmProvider;
use factcheck_search::SearchChain;

pub use assembler::assemble;
pub use citation::{CitationTable, resolve_citation};
pub use document::{DocumentMetadata, FactCheckRequest, Page, RetrievedDocument};
pub use filter::filter_results;
pub use language::Language;
pub use query::{fallback_query, optimize, question_query};
pub use summarizer::{Summarizer, SummaryError};
pub use supplement::WebSearchSupplement;

use crate::config::Config;

/// Runs the summarizer, the web supplement and the assembler in sequence.
#[derive(Debug, Clone)]
pub struct FactChecker<P> {
    summarizer: Summarizer<P>,
    supplement: WebSearchSupplement,
}

impl<P: LlmProvider> FactChecker<P> {
    /// Summaries only, web search disabled.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            summarizer: Summarizer::new(provider),
            supplement: WebSearchSupplement::disabled(),
        }
    }

    /// Wire the pipeline from loaded configuration and resolved secrets.
    #[must_use]
    pub fn from_config(provider: P, config: &Config) -> Self {
        let supplement = if config.search.enabled {
            let tavily_key = config
                .secrets
                .tavily_api_key
                .as_ref()
                .map(vault::Secret::expose);
            let chain = SearchChain::from_config(&config.search, tavily_key);
            if chain.is_empty() {
                tracing::warn!("web search enabled but no search provider is available");
            } else {
                tracing::debug!(providers = ?chain.provider_names(), "web search chain ready");
            }
            WebSearchSupplement::new(true, chain)
        } else {
            WebSearchSupplement::disabled()
        };

        Self {
            summarizer: Summarizer::new(provider).with_temperature(config.llm.temperature),
            supplement,
        }
    }

    #[must_use]
    pub fn with_supplement(mut self, supplement: WebSearchSupplement) -> Self {
        self.supplement = supplement;
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.summarizer = self.summarizer.with_temperature(temperature);
        self
    }

    #[must_use]
    pub fn summarizer(&self) -> &Summarizer<P> {
        &self.summarizer
    }

    /// Produce the complete fact-check block. Never fails; degrades to a
    /// summary without web results, then to a raw document excerpt.
    pub async fn generate(&self, request: &FactCheckRequest) -> String {
        self.check(
            &request.question,
            &request.documents,
            &request.answer,
            request.language,
        )
        .await
    }

    pub async fn check(
        &self,
        question: &str,
        documents: &[RetrievedDocument],
        answer: &str,
        language: Language,
    ) -> String {
        let kb_summary = self
            .summarizer
            .summarize(question, documents, answer, language)
            .await;
        let web_summary = self
            .supplement
            .supplement(question, documents, language)
            .await;
        assemble(&kb_summary, web_summary.as_deref(), language)
    }
}

#[cfg(test)]
mod tests {
    use factcheck_llm::mock::MockProvider;
    use factcheck_search::SearchResult;
    use factcheck_search::mock::MockSearchProvider;

    use super::*;

    fn request(language: Language) -> FactCheckRequest {
        FactCheckRequest {
            question: "Is the monk seal endangered?".into(),
            documents: vec![
                RetrievedDocument::new("The Mediterranean monk seal is endangered.")
                    .with_source("n053p341.pdf")
                    .with_page(2),
            ],
            answer: "Yes.".into(),
            language,
        }
    }

    #[tokio::test]
    async fn summary_without_web_search() {
        let checker = FactChecker::new(MockProvider::with_responses(vec!["Listed as Vulnerable.".into()]));
        let out = checker.generate(&request(Language::English)).await;
        assert!(out.starts_with("📋 **Fact-Check Based on Scientific Knowledge**\n\nListed as Vulnerable."));
        assert!(!out.contains("---"));
    }

    #[tokio::test]
    async fn summary_with_web_digest() {
        let search = MockSearchProvider::returning(
            "mock",
            vec![SearchResult::new("Monk seal status", "Population rising", "https://iucn.org")],
        );
        let checker = FactChecker::new(MockProvider::with_responses(vec!["Resumo.".into()]))
            .with_supplement(WebSearchSupplement::new(
                true,
                SearchChain::new(vec![search.into()]),
            ));

        let out = checker.generate(&request(Language::Portuguese)).await;
        assert!(out.starts_with("📋 **Verificação de Factos Baseada em Conhecimento Científico**"));
        assert!(out.contains("\n\n---\n\n🌐 **Informação da Internet:**"));
        assert!(out.contains("1. **Monk seal status**"));
    }

    #[test]
    fn from_config_disabled_search() {
        let checker = FactChecker::from_config(MockProvider::default(), &Config::default());
        assert!(!checker.supplement.is_enabled());
    }

    #[tokio::test]
    async fn from_config_applies_temperature() {
        let mut config = Config::default();
        config.llm.temperature = 0.9;
        let provider = MockProvider::default();
        let checker = FactChecker::from_config(provider.clone(), &config);
        checker.generate(&request(Language::English)).await;
        assert_eq!(provider.calls()[0].options.temperature, Some(0.9));
    }
}
