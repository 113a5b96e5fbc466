use std::sync::Arc;

use factcheck_llm::{ChatOptions, LlmError, LlmProvider, Message};

use crate::citation::CitationTable;
use crate::document::RetrievedDocument;
use crate::language::Language;

const MAX_DOCUMENTS: usize = 3;
const EXCERPT_CHARS: usize = 500;
const FALLBACK_CHARS: usize = 200;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("no reference documents to summarize")]
    NoDocuments,

    #[error("summary generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("model returned an empty summary")]
    EmptyReply,
}

/// Prefix of `s` holding at most `max` characters.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Produces the knowledge-base part of a fact-check through a language model,
/// falling back to a raw excerpt when generation fails.
#[derive(Debug, Clone)]
pub struct Summarizer<P> {
    provider: P,
    citations: Arc<CitationTable>,
    temperature: f32,
}

impl<P: LlmProvider> Summarizer<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            citations: CitationTable::shared(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn with_citations(mut self, citations: impl Into<Arc<CitationTable>>) -> Self {
        self.citations = citations.into();
        self
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Summary with a source line, or a deterministic fallback. Never fails.
    pub async fn summarize(
        &self,
        question: &str,
        documents: &[RetrievedDocument],
        answer: &str,
        language: Language,
    ) -> String {
        match self.generate(question, documents, answer, language).await {
            Ok(summary) => summary,
            Err(SummaryError::NoDocuments) => language.no_information().to_owned(),
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "summary generation failed, using document excerpt"
                );
                self.fallback(documents, language)
            }
        }
    }

    /// Ask the model for a summary and append the source line.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::NoDocuments`] without calling the model when
    /// `documents` is empty, [`SummaryError::Generation`] when the call fails and
    /// [`SummaryError::EmptyReply`] when the reply is blank.
    pub async fn generate(
        &self,
        question: &str,
        documents: &[RetrievedDocument],
        answer: &str,
        language: Language,
    ) -> Result<String, SummaryError> {
        if documents.is_empty() {
            return Err(SummaryError::NoDocuments);
        }

        let mut blocks = Vec::new();
        let mut sources = Vec::new();
        for (i, doc) in documents.iter().take(MAX_DOCUMENTS).enumerate() {
            let label = self.label_for(doc);
            let page = doc.page_label();
            blocks.push(format!(
                "[Source {}: {label}, Page {page}]\n{}",
                i + 1,
                truncate_chars(&doc.content, EXCERPT_CHARS)
            ));
            sources.push(format!("{label} (p.{page})"));
        }

        let prompt = build_prompt(question, answer, &blocks.join("\n\n"), language);
        let options = ChatOptions::default().with_temperature(self.temperature);
        tracing::debug!(
            model = self.provider.model(),
            documents = blocks.len(),
            "requesting fact-check summary"
        );

        let reply = self
            .provider
            .chat(&[Message::user(prompt)], &options)
            .await?;
        let summary = reply.trim();
        if summary.is_empty() {
            return Err(SummaryError::EmptyReply);
        }

        Ok(format!(
            "{summary}\n\n{} {}",
            language.sources_label(),
            sources.join(", ")
        ))
    }

    fn label_for(&self, doc: &RetrievedDocument) -> String {
        let source = doc.metadata.source_file.as_deref().unwrap_or("Unknown");
        self.citations.resolve(Some(source))
    }

    fn fallback(&self, documents: &[RetrievedDocument], language: Language) -> String {
        let Some(first) = documents.first() else {
            return language.no_information().to_owned();
        };
        format!(
            "{}\n\n{}...\n\n{} {} (p.{})",
            language.fallback_intro(),
            truncate_chars(&first.content, FALLBACK_CHARS),
            language.source_label(),
            self.label_for(first),
            first.page_label()
        )
    }
}

fn build_prompt(question: &str, answer: &str, documents: &str, language: Language) -> String {
    match language {
        Language::Portuguese => format!(
            "Tu és um verificador de factos científico. Com base nos documentos fornecidos, \
cria um resumo claro e conciso.

**Pergunta do utilizador:** {question}

**Resposta da IA:** {answer}

**Documentos de referência:**
{documents}

**Tua tarefa:**
1. Resume os pontos-chave dos documentos que apoiam a resposta
2. Menciona dados específicos (números, locais, datas) se disponíveis
3. Mantém o resumo abaixo de 100 palavras
4. Usa linguagem simples e clara
5. Se os documentos não apoiam a resposta, indica isso

**Resumo factual:**"
        ),
        Language::English => format!(
            "You are a scientific fact-checker. Based on the provided documents, \
create a clear and concise summary.

**User's Question:** {question}

**AI's Answer:** {answer}

**Reference Documents:**
{documents}

**Your Task:**
1. Summarize key points from the documents that support the answer
2. Mention specific data (numbers, locations, dates) if available
3. Keep the summary under 100 words
4. Use simple, clear language
5. If documents don't support the answer, indicate that

**Factual Summary:**"
        ),
    }
}
