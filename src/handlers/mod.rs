pub mod chat;
pub mod health;
pub mod settings;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(chat::chat_page))
        .route("/api/chat", get(chat::get_chat))
        .route("/api/chat/message", post(chat::send_message))
        .route(
            "/api/profile",
            get(settings::get_profile)
                .put(settings::replace_profile)
                .patch(settings::update_profile),
        )
        .route("/api/settings", get(settings::get_settings))
        .route("/api/settings/field", post(settings::update_field))
        .route("/api/templates", get(settings::get_templates))
        .route("/api/templates/:key/load", post(settings::load_template))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
