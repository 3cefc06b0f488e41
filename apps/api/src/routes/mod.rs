pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::contact::handlers::{handle_contact, handle_contact_stream, MAX_BODY_BYTES};
use crate::portfolio::handlers::{handle_list_projects, handle_list_skills};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio catalog
        .route("/api/projects", get(handle_list_projects))
        .route("/api/skills", get(handle_list_skills))
        // Contact relay; every method is routed so non-POST gets the JSON 405
        .route(
            "/api/contact",
            any(handle_contact).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route("/api/contact/stream", any(handle_contact_stream))
        .with_state(state);

    // Single-page app: unknown paths fall back to index.html for client-side routing
    match static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    }
}
