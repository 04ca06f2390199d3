use actix_web::{test, web, App};
use async_trait::async_trait;
use autoslides_common::{AppConfig, AutoSlidesError, Result};
use autoslides_llm::{Generator, LlmClient};
use autoslides_server::{configure, AppState};
use std::sync::Arc;

/// Answers every prompt with the same text
struct FixedReply(&'static str);

#[async_trait]
impl LlmClient for FixedReply {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.to_string())
    }

    fn provider(&self) -> &str {
        "Stub Provider"
    }
}

/// Fails every call as if the network were down
struct Unreachable;

#[async_trait]
impl LlmClient for Unreachable {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(AutoSlidesError::network("connection refused"))
    }

    fn provider(&self) -> &str {
        "Stub Provider"
    }
}

fn ready_state(client: Arc<dyn LlmClient>) -> web::Data<AppState> {
    web::Data::new(AppState::with_generator(AppConfig::default(), Generator::new(client)))
}

fn unready_state() -> web::Data<AppState> {
    web::Data::new(AppState::without_generator(
        AppConfig::default(),
        "GOOGLE_AI_API_KEY is not set",
    ))
}

#[actix_web::test]
async fn test_root() {
    let app = test::init_service(App::new().app_data(unready_state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "AutoSlides API");
    assert_eq!(body["status"], "running");
}

#[actix_web::test]
async fn test_health_reports_provider() {
    let app = test::init_service(
        App::new()
            .app_data(ready_state(Arc::new(FixedReply("unused"))))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ai_provider"], "Stub Provider");
}

#[actix_web::test]
async fn test_health_without_generator() {
    let app = test::init_service(App::new().app_data(unready_state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body.get("ai_provider").is_none());
    assert!(body["message"].as_str().unwrap().contains("GOOGLE_AI_API_KEY"));
}

#[actix_web::test]
async fn test_generation_endpoints_unavailable_without_generator() {
    let app = test::init_service(App::new().app_data(unready_state()).configure(configure)).await;

    let requests = [
        ("/generate-slides", serde_json::json!({"sources": []})),
        ("/generate-title", serde_json::json!({"content": "x"})),
        ("/generate-summary", serde_json::json!({"content": "x"})),
    ];

    for (uri, payload) in requests {
        let req = test::TestRequest::post().uri(uri).set_json(&payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503, "{}", uri);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "AI agent not available");
    }
}

#[actix_web::test]
async fn test_generate_slides_success() {
    let reply = "```json\n{\"slides\":[{\"title\":\"Intro\",\"content\":[\"a\",\"b\"],\"image\":null,\"table\":{\"headers\":[\"k\",\"v\"],\"rows\":[[\"1\",\"2\"]]}}]}\n```";
    let app = test::init_service(
        App::new()
            .app_data(ready_state(Arc::new(FixedReply(reply))))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate-slides")
        .set_json(serde_json::json!({
            "sources": [
                {"type": "text", "value": "Hello"},
                {"type": "url", "value": "http://x"}
            ],
            "slide_count": 3,
            "presentation_goal": "overview"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["slides"][0]["title"], "Intro");
    assert_eq!(body["slides"][0]["table"]["rows"][0][1], "2");
    assert_eq!(body["source_usage"]["source_0"], 50.0);
    assert_eq!(body["source_usage"]["source_1"], 50.0);
    assert!(body["error"].is_null());
}

#[actix_web::test]
async fn test_generate_slides_failure_returns_placeholder() {
    let app = test::init_service(
        App::new()
            .app_data(ready_state(Arc::new(Unreachable)))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate-slides")
        .set_json(serde_json::json!({"content": "legacy body"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let slides = body["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0]["title"], "Error Generating Slides");
    assert_eq!(body["error"], "Network error: connection refused");
    assert_eq!(body["error_kind"], "network");
    assert_eq!(slides[0]["content"][1], body["error"]);
}

#[actix_web::test]
async fn test_generate_title() {
    let app = test::init_service(
        App::new()
            .app_data(ready_state(Arc::new(FixedReply("A Very Long Title About Many Things"))))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate-title")
        .set_json(serde_json::json!({"content": "whatever"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "A Very Long Title About...");
}

#[actix_web::test]
async fn test_generate_title_fallback_uses_content() {
    let app = test::init_service(
        App::new()
            .app_data(ready_state(Arc::new(Unreachable)))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate-title")
        .set_json(serde_json::json!({"content": "Quarterly results for the northern region"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "Quarterly results for the northern...");
}

#[actix_web::test]
async fn test_generate_summary_respects_max_length() {
    let app = test::init_service(
        App::new()
            .app_data(ready_state(Arc::new(FixedReply(
                "This summary is definitely longer than twenty characters",
            ))))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate-summary")
        .set_json(serde_json::json!({"content": "x", "max_length": 20}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let summary = body["summary"].as_str().unwrap();
    assert_eq!(summary.chars().count(), 20);
    assert_eq!(summary, "This summary is d...");
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(ready_state(Arc::new(FixedReply("unused"))))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate-slides")
        .set_json(serde_json::json!({"sources": [{"type": "audio", "value": "x"}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
}
