use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::chat::{self, TurnOutcome};
use crate::services::render::{self, ChatView, MessageView};
use crate::state::AppState;

static CHAT_HTML: &str = include_str!("../web/chat.html");

pub async fn chat_page() -> Html<&'static str> {
    Html(CHAT_HTML)
}

// GET /api/chat
pub async fn get_chat(State(state): State<Arc<AppState>>) -> Json<ChatView> {
    let session = state.session();
    Json(render::chat_view(&session))
}

// POST /api/chat/message
#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    pub accepted: bool,
    pub messages: Vec<MessageView>,
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let response = match chat::submit_message(&state, &payload.text).await? {
        TurnOutcome::Ignored => SendMessageResponse {
            accepted: false,
            messages: Vec::new(),
        },
        TurnOutcome::Completed {
            user_message,
            ai_message,
        } => SendMessageResponse {
            accepted: true,
            messages: vec![
                render::render_message(&user_message),
                render::render_message(&ai_message),
            ],
        },
    };

    Ok(Json(response))
}
