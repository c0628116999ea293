use std::sync::{Mutex, MutexGuard};

use crate::services::ai::LlmProvider;
use crate::services::chat::ChatSession;

pub struct AppState {
    pub llm: Box<dyn LlmProvider>,
    pub session: Mutex<ChatSession>,
}

impl AppState {
    pub fn new(llm: Box<dyn LlmProvider>, session: ChatSession) -> Self {
        Self {
            llm,
            session: Mutex::new(session),
        }
    }

    /// Never held across an `.await`.
    pub fn session(&self) -> MutexGuard<'_, ChatSession> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
