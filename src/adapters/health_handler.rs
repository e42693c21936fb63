use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adapters::ui_handler::UIHandler;
use crate::config::Settings;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub listening: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub config: String,
    pub ui_assets: String,
}

pub struct HealthHandler {
    settings: Arc<RwLock<Settings>>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self {
            settings,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let uptime = self.start_time.elapsed().as_secs();
        let listening = self.settings.read().await.bind_address();

        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            listening,
            checks: HealthChecks {
                config: "ok".to_string(),
                ui_assets: if UIHandler::has_index() { "ok" } else { "missing" }.to_string(),
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - ready once the compiled UI is embedded
    pub async fn ready(&self) -> impl IntoResponse {
        if UIHandler::has_index() {
            (StatusCode::OK, Json(serde_json::json!({
                "status": "ready",
                "message": "Dashboard is ready to serve"
            })))
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
                "status": "not_ready",
                "message": "UI assets not embedded"
            })))
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerSettings;

    fn handler() -> HealthHandler {
        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
        };
        HealthHandler::new(Arc::new(RwLock::new(settings)))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = handler().health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: HealthStatus = serde_json::from_slice(&body).unwrap();
        assert_eq!(status.status, "healthy");
        assert_eq!(status.listening, "127.0.0.1:3000");
    }

    #[tokio::test]
    async fn test_ready_tracks_ui_assets() {
        let response = handler().ready().await.into_response();
        let expected = if UIHandler::has_index() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        assert_eq!(response.status(), expected);
    }

    #[tokio::test]
    async fn test_live_endpoint() {
        let response = handler().live().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
