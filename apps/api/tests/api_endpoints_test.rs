//! End-to-end tests for the HTTP surface.
//!
//! Each test boots the real router on an ephemeral port with the Ollama
//! adapter pointed at a wiremock backend, then drives it over the wire with
//! reqwest. Covers the success envelopes, the validation and configuration
//! failure envelopes, and the API-key gate.

use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::config::Config;
use api::routes::build_router;
use api::state::AppState;

fn test_config(ollama_url: &str) -> Config {
    Config {
        ai_provider: "ollama".to_string(),
        gemini_api_key: None,
        huggingface_api_key: None,
        openai_api_key: None,
        ollama_base_url: ollama_url.to_string(),
        ollama_model: "llama3.2".to_string(),
        service_api_key: None,
        port: 0,
        rust_log: "info".to_string(),
    }
}

/// Serves the app on an ephemeral port and returns its base URL.
async fn serve(config: Config) -> String {
    let app = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Mounts a mock Ollama backend replying with `reply` to every generate call.
async fn mock_ollama(reply: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": reply})))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_optimize_returns_success_envelope() {
    let backend = mock_ollama("Line A\nLine B").await;
    let addr = serve(test_config(&backend.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/optimize"))
        .json(&json!({"resumeText": "My resume", "jobDescription": "My target JD"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["optimizedResume"], json!("Line A\nLine B"));
}

#[tokio::test]
async fn test_generate_questions_returns_parsed_list() {
    let backend = mock_ollama("• Q1\n• Q2\n• Q3").await;
    let addr = serve(test_config(&backend.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/generate-questions"))
        .json(&json!({"resumeText": "My resume", "jobRole": "Backend Engineer"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["questions"], json!(["Q1", "Q2", "Q3"]));
}

#[tokio::test]
async fn test_generate_questions_defaults_job_role() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_string_contains("Software Engineer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "• Q1"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    let addr = serve(test_config(&mock_server.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/generate-questions"))
        .json(&json!({"resumeText": "My resume"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_optimize_rejects_whitespace_resume_text() {
    let addr = serve(test_config("http://localhost:11434")).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/optimize"))
        .json(&json!({"resumeText": "   ", "jobDescription": "A JD"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Resume text is required"));
    assert_eq!(body["errorKind"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_optimize_rejects_missing_job_description() {
    let addr = serve(test_config("http://localhost:11434")).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/optimize"))
        .json(&json!({"resumeText": "My resume"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Job description is required"));
}

#[tokio::test]
async fn test_missing_body_is_rejected() {
    let addr = serve(test_config("http://localhost:11434")).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/optimize"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Request body is required"));
}

#[tokio::test]
async fn test_misconfigured_provider_returns_config_error() {
    let mut config = test_config("http://localhost:11434");
    config.ai_provider = "gemini".to_string();
    let addr = serve(config).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/optimize"))
        .json(&json!({"resumeText": "My resume", "jobDescription": "A JD"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
    assert_eq!(body["errorKind"], json!("CONFIG_ERROR"));
}

#[tokio::test]
async fn test_unknown_provider_identifier_is_reported() {
    let mut config = test_config("http://localhost:11434");
    config.ai_provider = "claude".to_string();
    let addr = serve(config).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/generate-questions"))
        .json(&json!({"resumeText": "My resume"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        json!("Unknown AI provider: claude. Use 'gemini', 'huggingface', 'openai', or 'ollama'")
    );
    assert_eq!(body["errorKind"], json!("UNKNOWN_PROVIDER"));
}

#[tokio::test]
async fn test_backend_failure_maps_to_provider_error_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;
    let addr = serve(test_config(&mock_server.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/optimize"))
        .json(&json!({"resumeText": "My resume", "jobDescription": "A JD"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("AI optimization failed: "));
    assert!(error.contains("Ollama API error: 500"));
    assert_eq!(body["errorKind"], json!("PROVIDER_ERROR"));
}

#[tokio::test]
async fn test_api_key_gate_rejects_before_validation() {
    let mut config = test_config("http://localhost:11434");
    config.service_api_key = Some("sekrit".to_string());
    let addr = serve(config).await;
    let client = reqwest::Client::new();

    // Wrong key, and a body that would fail validation: auth must win.
    let response = client
        .post(format!("{addr}/optimize"))
        .header("X-API-Key", "wrong")
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Unauthorized: Invalid API key"));

    // Missing header is rejected the same way.
    let response = client
        .post(format!("{addr}/generate-questions"))
        .json(&json!({"resumeText": "My resume"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_api_key_gate_passes_matching_key() {
    let backend = mock_ollama("Optimized").await;
    let mut config = test_config(&backend.uri());
    config.service_api_key = Some("sekrit".to_string());
    let addr = serve(config).await;

    let response = reqwest::Client::new()
        .post(format!("{addr}/optimize"))
        .header("X-API-Key", "sekrit")
        .json(&json!({"resumeText": "My resume", "jobDescription": "A JD"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_health_is_open_and_reports_provider_state() {
    let mut config = test_config("http://localhost:11434");
    // Gate enabled; /health must stay reachable without the key.
    config.service_api_key = Some("sekrit".to_string());
    let addr = serve(config).await;

    let response = reqwest::Client::new()
        .get(format!("{addr}/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["service"], json!("vitae-api"));
    assert_eq!(body["ai_provider"], json!("ollama"));
    assert_eq!(body["ollama_url"], json!("http://localhost:11434"));
    assert_eq!(body["gemini_configured"], json!(false));
    assert_eq!(body["huggingface_configured"], json!(false));
    assert_eq!(body["openai_configured"], json!(false));
}

#[tokio::test]
async fn test_health_nulls_ollama_url_for_other_providers() {
    let mut config = test_config("http://localhost:11434");
    config.ai_provider = "gemini".to_string();
    config.gemini_api_key = Some("AIzaReal".to_string());
    let addr = serve(config).await;

    let body: Value = reqwest::Client::new()
        .get(format!("{addr}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["ai_provider"], json!("gemini"));
    assert_eq!(body["gemini_configured"], json!(true));
    assert_eq!(body["ollama_url"], Value::Null);
}
