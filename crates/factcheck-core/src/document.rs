use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Page reference as produced by the retrieval layer: a number or a label.
///
/// Numbers are kept as received, so `3.0` and `-1` print unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Page {
    Number(serde_json::Number),
    Label(String),
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Page {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Page {
    fn from(s: &str) -> Self {
        Self::Label(s.to_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
}

/// A passage returned by the retrieval layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    #[serde(alias = "page_content")]
    pub content: String,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl RetrievedDocument {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: DocumentMetadata::default(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source_file: impl Into<String>) -> Self {
        self.metadata.source_file = Some(source_file.into());
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: impl Into<Page>) -> Self {
        self.metadata.page = Some(page.into());
        self
    }

    /// Page label used in citations; `N/A` when the metadata has none.
    #[must_use]
    pub fn page_label(&self) -> String {
        self.metadata
            .page
            .as_ref()
            .map_or_else(|| "N/A".to_owned(), ToString::to_string)
    }
}

/// Everything needed to produce one fact-check block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckRequest {
    pub question: String,
    #[serde(default)]
    pub documents: Vec<RetrievedDocument>,
    pub answer: String,
    #[serde(default)]
    pub language: Language,
}

impl FactCheckRequest {
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid request document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
