use factcheck_core::config::Config;
use factcheck_core::vault::Secret;
use factcheck_core::{FactChecker, FactCheckRequest, Language, RetrievedDocument};
use factcheck_llm::openai::OpenAiProvider;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn llm_server(reply: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": reply}}]
        })))
        .mount(&server)
        .await;
    server
}

fn llm_for(server: &MockServer) -> OpenAiProvider {
    OpenAiProvider::new("sk-test".into(), server.uri(), "qwen-turbo".into())
}

fn request(language: Language) -> FactCheckRequest {
    FactCheckRequest {
        question: "Where do monk seals give birth?".into(),
        documents: vec![
            RetrievedDocument::new(
                "Mediterranean monk seals give birth in marine caves; conservation measures protect pupping sites.",
            )
            .with_source("/corpus/Cave_habitats_used_by_Mediterranean_monk.pdf")
            .with_page(14),
        ],
        answer: "In sea caves.".into(),
        language,
    }
}

fn search_config(ddg_base: &str, tavily_base: &str) -> Config {
    let mut config = Config::default();
    config.search.enabled = true;
    config.search.timeout = 5;
    config.search.duckduckgo.base_url = ddg_base.to_owned();
    config.search.tavily.base_url = tavily_base.to_owned();
    config
}

const LABEL: &str =
    "Bundone 2010 - Cave habitats used by Mediterranean monk seals Monachus monachus in Sardinia";

#[tokio::test]
async fn english_summary_without_web_search() {
    let llm = llm_server("Monk seals use marine caves for pupping.").await;
    let checker = FactChecker::from_config(llm_for(&llm), &Config::default());

    let out = checker.generate(&request(Language::English)).await;
    assert_eq!(
        out,
        format!(
            "📋 **Fact-Check Based on Scientific Knowledge**\n\n\
Monk seals use marine caves for pupping.\n\n📚 **Sources:** {LABEL} (p.14)"
        )
    );
    assert_eq!(out.matches("📚").count(), 1);
    assert!(!out.contains("🌐"));
}

#[tokio::test]
async fn search_failure_omits_web_section() {
    let llm = llm_server("Caves are used for birthing.").await;
    let ddg = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&ddg)
        .await;

    let config = search_config(&ddg.uri(), "http://127.0.0.1:1");
    let checker = FactChecker::from_config(llm_for(&llm), &config);

    let out = checker.generate(&request(Language::English)).await;
    assert!(out.contains("Caves are used for birthing."));
    assert!(!out.contains("---"));
    assert!(!out.contains("Internet Information"));
}

#[tokio::test]
async fn llm_failure_and_search_failure_still_produce_content() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&llm)
        .await;
    let ddg = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ddg)
        .await;

    let config = search_config(&ddg.uri(), "http://127.0.0.1:1");
    let checker = FactChecker::from_config(llm_for(&llm), &config);

    let out = checker.generate(&request(Language::English)).await;
    assert!(out.starts_with(
        "📋 **Fact-Check Based on Scientific Knowledge**\n\n📄 Information from documents:\n\n"
    ));
    assert!(out.ends_with(&format!("📚 Source: {LABEL} (p.14)")));
}

#[tokio::test]
async fn duckduckgo_results_are_filtered_and_digested() {
    let llm = llm_server("Summary.").await;
    let ddg = MockServer::start().await;
    let html = r#"
<div class="result"><a class="result__a" href="https://github.com/seal/seal">seal: a Rust framework</a>
<a class="result__snippet">Sealed traits for your code</a></div>
<div class="result"><a class="result__a" href="https://monachus-guardian.org/pups">Pupping season in Madeira</a>
<a class="result__snippet">Monk seal pups were recorded in the Desertas caves.</a></div>
"#;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&ddg)
        .await;

    let config = search_config(&ddg.uri(), "http://127.0.0.1:1");
    let checker = FactChecker::from_config(llm_for(&llm), &config);

    let out = checker.generate(&request(Language::English)).await;
    assert!(out.contains(
        "\n\n---\n\n🌐 **Internet Information:**\n\n1. **Pupping season in Madeira**\n   \
Monk seal pups were recorded in the Desertas caves....\n   🔗 https://monachus-guardian.org/pups"
    ));
    assert!(!out.contains("framework"));
    assert!(!out.contains("2. **"));
}

#[tokio::test]
async fn tavily_is_tried_after_duckduckgo_fails() {
    let llm = llm_server("Summary.").await;
    let ddg = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ddg)
        .await;
    let tavily = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(serde_json::json!({
            "query": "Mediterranean monk seal Where do monk seals give birth?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"title": "Monk seal recovery", "content": "Numbers are rising.", "url": "https://t.org"}]
        })))
        .expect(1)
        .mount(&tavily)
        .await;

    let mut config = search_config(&ddg.uri(), &tavily.uri());
    config.secrets.tavily_api_key = Some(Secret::new("tvly-live"));
    let checker = FactChecker::from_config(llm_for(&llm), &config);

    let out = checker.generate(&request(Language::English)).await;
    assert!(out.contains("1. **Monk seal recovery**\n   Numbers are rising....\n   🔗 https://t.org"));
}

#[tokio::test]
async fn placeholder_tavily_key_is_never_used() {
    let llm = llm_server("Summary.").await;
    let tavily = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&tavily)
        .await;

    let mut config = search_config("http://127.0.0.1:1", &tavily.uri());
    config.search.provider = factcheck_search::SearchProviderKind::Tavily;
    config.secrets.tavily_api_key = Some(Secret::new("tvly-your-api-key"));
    let checker = FactChecker::from_config(llm_for(&llm), &config);

    let out = checker.generate(&request(Language::English)).await;
    assert!(!out.contains("---"));
}

#[tokio::test]
async fn portuguese_labels_throughout() {
    let llm = llm_server("As focas usam grutas marinhas.").await;
    let ddg = MockServer::start().await;
    let html = r#"<div class="result"><a class="result__a" href="https://a.pt">Foca-monge na Madeira</a>
<a class="result__snippet">Conservation of the monk seal colony.</a></div>"#;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&ddg)
        .await;

    let config = search_config(&ddg.uri(), "http://127.0.0.1:1");
    let checker = FactChecker::from_config(llm_for(&llm), &config);

    let out = checker.generate(&request(Language::Portuguese)).await;
    assert!(out.starts_with("📋 **Verificação de Factos Baseada em Conhecimento Científico**\n\n"));
    assert!(out.contains("📚 **Fontes:**"));
    assert!(out.contains("🌐 **Informação da Internet:**"));
    for english in ["Fact-Check Based", "Sources:", "Internet Information", "Information from"] {
        assert!(!out.contains(english), "unexpected English label {english}");
    }
}

#[tokio::test]
async fn empty_documents_use_fallback_query_and_no_model_call() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&llm)
        .await;
    let ddg = MockServer::start().await;
    let html = r#"<div class="result"><a class="result__a" href="https://m.org/birth">Monk seal pupping caves</a>
<a class="result__snippet">Females give birth in marine caves.</a></div>"#;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param(
            "q",
            "Mediterranean monk seal Where do monk seals give birth? marine mammal",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(1)
        .mount(&ddg)
        .await;

    let config = search_config(&ddg.uri(), "http://127.0.0.1:1");
    let checker = FactChecker::from_config(llm_for(&llm), &config);
    let req = FactCheckRequest {
        documents: Vec::new(),
        ..request(Language::English)
    };
    let out = checker.generate(&req).await;
    assert_eq!(
        out,
        "📋 **Fact-Check Based on Scientific Knowledge**\n\n📄 No information available in the reference documents.\
\n\n---\n\n🌐 **Internet Information:**\n\n\
1. **Monk seal pupping caves**\n   Females give birth in marine caves....\n   🔗 https://m.org/birth"
    );
}
