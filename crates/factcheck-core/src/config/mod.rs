mod env;
mod types;


pub use types::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use crate::vault::{Secret, VaultProvider};

pub const DASHSCOPE_API_KEY: &str = "DASHSCOPE_API_KEY";
pub const TAVILY_API_KEY: &str = "TAVILY_API_KEY";

/// Config file location: `--config <path>`, then `FACTCHECK_CONFIG`, then
/// `config/default.toml`.
#[must_use]
pub fn resolve_config_path(cli_path: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var("FACTCHECK_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("config/default.toml")
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error when a value is outside its usable range.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            bail!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            );
        }
        if self.llm.base_url.trim().is_empty() {
            bail!("llm.base_url must not be empty");
        }
        if self.llm.timeout == 0 {
            bail!("llm.timeout must be greater than 0");
        }
        if self.search.timeout == 0 {
            bail!("search.timeout must be greater than 0");
        }
        Ok(())
    }

    /// Resolve API keys through the vault.
    ///
    /// # Errors
    ///
    /// Returns an error if the vault backend fails.
    pub async fn resolve_secrets(&mut self, vault: &dyn VaultProvider) -> anyhow::Result<()> {
        if let Some(val) = vault.get_secret(DASHSCOPE_API_KEY).await? {
            self.secrets.dashscope_api_key = Some(Secret::new(val));
        }
        if let Some(val) = vault.get_secret(TAVILY_API_KEY).await? {
            self.secrets.tavily_api_key = Some(Secret::new(val));
        }
        Ok(())
    }
}
