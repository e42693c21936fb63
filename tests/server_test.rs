use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cirrhosis_dashboard::adapters::health_handler::HealthHandler;
use cirrhosis_dashboard::adapters::ui_handler::UIHandler;
use cirrhosis_dashboard::config::{ServerSettings, Settings};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::util::ServiceExt;

fn app() -> Router {
    let settings = Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
    };
    let health_handler = Arc::new(HealthHandler::new(Arc::new(RwLock::new(settings))));
    cirrhosis_dashboard::create_app(health_handler)
}

async fn get(path: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].is_number());
    assert_eq!(body["listening"], "127.0.0.1:3000");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["config"], "ok");
}

#[tokio::test]
async fn test_health_live_endpoint() {
    let (status, body) = get("/health/live").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_health_ready_endpoint() {
    let (status, _) = get("/health/ready").await;
    let expected = if UIHandler::has_index() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    assert_eq!(status, expected);
}

#[tokio::test]
async fn test_no_prediction_api() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/predict")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    // Unknown paths reach the SPA fallback, never a JSON endpoint
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(!content_type.contains("application/json"));
}

#[tokio::test]
async fn test_spa_fallback() {
    let (status, _) = get("/results").await;
    if UIHandler::has_index() {
        assert_eq!(status, StatusCode::OK);
    } else {
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
