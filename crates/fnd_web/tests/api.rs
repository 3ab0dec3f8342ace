use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use fnd_core::{Article, Error, HistoryStore, Result};
use fnd_inference::{corpus::builtin_samples, Config, Detector};
use fnd_scrappers::Scraper;
use fnd_storage::MemoryHistory;
use fnd_web::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const FAKE_TEXT: &str = "Shocking secret miracle cure leaked! Click here before it gets deleted.";

/// Serves canned articles instead of hitting the network.
struct StubScraper;

#[async_trait]
impl Scraper for StubScraper {
    fn name(&self) -> &str {
        "stub"
    }

    fn can_handle(&self, _url: &str) -> bool {
        true
    }

    async fn scrape_article(&self, url: &str) -> Result<Article> {
        match url {
            "https://news.example.org/ok" => Ok(Article {
                title: "Council approves budget".to_string(),
                content: "The city council approved the annual budget after public hearings, \
                    according to officials who confirmed the figures on Tuesday."
                    .to_string(),
                source: Some("news.example.org".to_string()),
                url: Some(url.to_string()),
            }),
            "not a url" => Err(Error::InvalidUrl("relative URL without a base".to_string())),
            _ => Err(Error::Scraping("Failed to extract content".to_string())),
        }
    }
}

fn setup() -> (Router, Arc<MemoryHistory>) {
    let detector = Detector::train(&builtin_samples(), Config::default()).unwrap();
    let history = Arc::new(MemoryHistory::new());
    let state = AppState::new(Arc::new(detector), history.clone(), Arc::new(StubScraper));
    (create_app(state), history)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = setup();
    let (status, body) = send(app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model"], "naive-bayes");
    assert_eq!(json["history"], "memory");
}

#[tokio::test]
async fn test_analyze_records_history() {
    let (app, history) = setup();
    let (status, body) = send(
        app,
        post_json("/api/analyze", json!({ "text": FAKE_TEXT, "source": "forwarded email" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let report: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(report["title"], "Pasted Text Analysis");
    assert_eq!(report["result"]["label"], "fake");
    assert!(report["result"]["confidence"].as_f64().unwrap() > 0.9);
    assert!(report["signals"]["sensational_word_count"].as_u64().unwrap() >= 3);

    let entries = history.list().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].source.as_deref(), Some("forwarded email"));
}

#[tokio::test]
async fn test_short_text_is_422_and_not_recorded() {
    let (app, history) = setup();
    let (status, body) = send(app, post_json("/api/analyze", json!({ "text": "too short" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Text too short for analysis");
    assert_eq!(history.len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let (app, history) = setup();
    let missing_text = post_json("/api/analyze", json!({ "title": "no text" }));
    let not_json = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let missing_url = post_json("/api/analyze/url", json!({ "link": "https://example.org" }));

    for request in [missing_text, not_json, missing_url] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(!json["error"].as_str().unwrap().is_empty());
    }
    assert_eq!(history.len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_analyze_url() {
    let (app, history) = setup();
    let (status, body) = send(
        app,
        post_json("/api/analyze/url", json!({ "url": "https://news.example.org/ok" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let report: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(report["title"], "Council approves budget");
    assert_eq!(report["result"]["label"], "real");

    let entries = history.list().await.unwrap();
    assert_eq!(entries[0].source.as_deref(), Some("news.example.org"));
}

#[tokio::test]
async fn test_analyze_url_failures() {
    let (app, history) = setup();
    let (status, _) = send(
        app.clone(),
        post_json("/api/analyze/url", json!({ "url": "https://news.example.org/empty" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (status, _) = send(app, post_json("/api/analyze/url", json!({ "url": "not a url" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(history.len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_history_and_export_in_order() {
    let (app, _) = setup();
    let titles = ["one", "two", "three"];
    for title in titles {
        let (status, _) = send(
            app.clone(),
            post_json("/api/analyze", json!({ "text": FAKE_TEXT, "title": title })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(app.clone(), get("/api/history")).await;
    assert_eq!(status, StatusCode::OK);
    let entries: Vec<Value> = serde_json::from_slice(&body).unwrap();
    let listed: Vec<&str> = entries.iter().map(|e| e["title"].as_str().unwrap()).collect();
    assert_eq!(listed, titles);

    let response = app.oneshot(get("/api/history/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/x-ndjson"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let exported: Vec<Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(exported.len(), 3);
    assert_eq!(exported[2]["title"], "three");
}

#[tokio::test]
async fn test_learn() {
    let (app, _) = setup();
    let (status, body) = send(app, get("/api/learn")).await;
    assert_eq!(status, StatusCode::OK);
    let guide: Value = serde_json::from_slice(&body).unwrap();
    assert!(!guide["red_flags"].as_array().unwrap().is_empty());
    assert!(!guide["verification_tips"].as_array().unwrap().is_empty());
}
