use std::io::Read as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use factcheck_core::config::{Config, resolve_config_path};
use factcheck_core::vault::{EnvVaultProvider, Secret};
use factcheck_core::{FactCheckRequest, FactChecker, Language};
use factcheck_llm::http::default_client;
use factcheck_llm::openai::OpenAiProvider;

#[derive(Parser, Debug)]
#[command(name = "factcheck", version)]
#[command(about = "Assemble a fact-check summary for a monk seal Q&A answer", long_about = None)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request JSON file (`question`, `documents`, `answer`, `language`), or `-` for stdin.
    #[arg(long, default_value = "-")]
    request: String,

    /// Output language; overrides the request's own.
    #[arg(long)]
    language: Option<Language>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.as_deref());
    let mut config = Config::load(&config_path)?;
    config.validate()?;
    config.resolve_secrets(&EnvVaultProvider).await?;

    let mut request = read_request(&cli.request)?;
    if let Some(language) = cli.language {
        request.language = language;
    }

    let checker = FactChecker::from_config(build_provider(&config), &config);
    let content = checker.generate(&request).await;
    println!("{content}");
    Ok(())
}

fn read_request(source: &str) -> anyhow::Result<FactCheckRequest> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read request file {source}"))?
    };
    FactCheckRequest::from_json(&raw).context("failed to parse request JSON")
}

fn build_provider(config: &Config) -> OpenAiProvider {
    let api_key = config
        .secrets
        .dashscope_api_key
        .as_ref()
        .map(Secret::expose)
        .unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("DASHSCOPE_API_KEY not set, summaries will fall back to document excerpts");
    }
    OpenAiProvider::new(
        api_key.to_owned(),
        config.llm.base_url.clone(),
        config.llm.model.clone(),
    )
    .with_client(default_client(config.llm.timeout))
}

fn init_subscriber() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
