use factcheck_llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use factcheck_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::summarizer::DEFAULT_TEMPERATURE;
use crate::vault::Secret;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(skip)]
    pub secrets: ResolvedSecrets,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_llm_timeout() -> u64 {
    60
}

/// OpenAI-compatible chat completion endpoint used for summaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_llm_timeout")]
    pub timeout: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout: default_llm_timeout(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ResolvedSecrets {
    pub dashscope_api_key: Option<Secret>,
    pub tavily_api_key: Option<Secret>,
}
