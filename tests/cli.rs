use std::io::Write;
use std::process::{Command, Stdio};

fn factcheck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_factcheck"));
    for key in [
        "DASHSCOPE_API_KEY",
        "TAVILY_API_KEY",
        "USE_WEB_SEARCH",
        "WEB_SEARCH_PROVIDER",
        "QWEN_MODEL_NAME",
        "FACTCHECK_CONFIG",
        "FACTCHECK_LLM_BASE_URL",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("RUST_LOG", "off");
    cmd
}

fn config_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("factcheck.toml");
    std::fs::write(&path, "[llm]\nbase_url = \"http://127.0.0.1:1\"\n").unwrap();
    path
}

#[test]
fn missing_api_key_falls_back_to_excerpt() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("request.json");
    std::fs::write(
        &request,
        r#"{
            "question": "How many monk seals live in Madeira?",
            "answer": "About forty.",
            "documents": [
                {"page_content": "The Desertas colony holds around forty seals.",
                 "metadata": {"source_file": "guide.pdf", "page": 3}}
            ]
        }"#,
    )
    .unwrap();

    let output = factcheck()
        .arg("--config")
        .arg(config_file(&dir))
        .arg("--request")
        .arg(&request)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        "📋 **Fact-Check Based on Scientific Knowledge**\n\n\
📄 Information from documents:\n\n\
The Desertas colony holds around forty seals....\n\n\
📚 Source: Johnson et al 1998 - The Mediterranean Monk Seal Conservation Guidelines (p.3)"
    );
}

#[test]
fn reads_stdin_and_overrides_language() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = factcheck()
        .arg("--config")
        .arg(config_file(&dir))
        .args(["--language", "Portuguese"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"question": "q", "answer": "a", "documents": []}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("📋 **Verificação de Factos Baseada em Conhecimento Científico**"));
    assert!(stdout.contains("Nenhuma informação disponível"));
}

#[test]
fn invalid_request_fails() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("request.json");
    std::fs::write(&request, "not json").unwrap();

    let output = factcheck()
        .arg("--config")
        .arg(config_file(&dir))
        .arg("--request")
        .arg(&request)
        .output()
        .unwrap();
    assert!(!output.status.success());
}
