use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct Asset;

const INDEX: &str = "index.html";

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = uri.path().trim_start_matches('/');

        let path = if path.is_empty() { INDEX } else { path };

        match Asset::get(path) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
            }
            None => {
                // SPA fallback: client-side router resolves /results and friends
                if let Some(content) = Asset::get(INDEX) {
                    tracing::debug!("Serving {} for unknown path /{}", INDEX, path);
                    ([(header::CONTENT_TYPE, "text/html")], content.data).into_response()
                } else {
                    tracing::warn!("UI assets missing; build ui/ with trunk before serving");
                    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
                }
            }
        }
    }

    /// Whether the compiled UI is embedded in this binary
    pub fn has_index() -> bool {
        Asset::get(INDEX).is_some()
    }
}
