//! # Cirrhosis Risk Dashboard
//!
//! Host binary for the patient assessment UI. The Leptos application in
//! `ui/` is compiled to WebAssembly with trunk and embedded into this crate;
//! all intake validation and submission logic runs in the browser.
//!
//! The server exposes health probes and static assets only. There is no
//! prediction API: predictions shown in the UI are mock display data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cirrhosis_dashboard::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     println!("Would listen on {}", settings.bind_address());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;

use crate::adapters::health_handler::HealthHandler;
use crate::adapters::ui_handler::UIHandler;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates the Axum application router.
///
/// Health probes are matched first; every other path falls through to the
/// embedded single-page application.
pub fn create_app(health_handler: Arc<HealthHandler>) -> Router {
    let router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .fallback(UIHandler::serve);

    router.layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
