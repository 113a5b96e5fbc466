use super::Config;

impl Config {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("QWEN_MODEL_NAME") {
            self.llm.model = v;
        }
        if let Ok(v) = std::env::var("FACTCHECK_LLM_BASE_URL") {
            self.llm.base_url = v;
        }
        if let Ok(v) = std::env::var("FACTCHECK_LLM_TEMPERATURE")
            && let Ok(temperature) = v.parse::<f32>()
        {
            self.llm.temperature = temperature;
        }
        if let Ok(v) = std::env::var("FACTCHECK_LLM_TIMEOUT")
            && let Ok(secs) = v.parse::<u64>()
        {
            self.llm.timeout = secs;
        }
        if let Ok(v) = std::env::var("USE_WEB_SEARCH") {
            self.search.enabled = v.eq_ignore_ascii_case("true");
        }
        if let Ok(v) = std::env::var("WEB_SEARCH_PROVIDER") {
            match v.parse() {
                Ok(kind) => self.search.provider = kind,
                Err(_) => tracing::warn!("ignoring invalid WEB_SEARCH_PROVIDER value: {v}"),
            }
        }
        if let Ok(v) = std::env::var("FACTCHECK_SEARCH_TIMEOUT")
            && let Ok(secs) = v.parse::<u64>()
        {
            self.search.timeout = secs;
        }
    }
}
