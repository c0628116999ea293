use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{AiReply, BusinessProfile, ChatMessage, MessageTag, ProfilePatch};
use crate::services::ai::reply::generate_reply;
use crate::services::ai::AiError;
use crate::services::profile::{ProfileChange, ProfileStore};
use crate::state::AppState;

pub const APOLOGY: &str = "I'm sorry, I encountered a temporary error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    AwaitingResponse,
}

/// Everything the reply task needs, captured when the turn starts.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub history: Vec<ChatMessage>,
    pub utterance: String,
    pub profile: BusinessProfile,
    pub user_message: ChatMessage,
}

/// The page session: active profile, message thread and turn phase.
#[derive(Debug)]
pub struct ChatSession {
    profile: ProfileStore,
    messages: Vec<ChatMessage>,
    phase: TurnPhase,
}

impl ChatSession {
    /// Starts with the greeting only; the initial profile gets no system note.
    pub fn new(profile: BusinessProfile) -> Self {
        let greeting = ChatMessage::greeting(&profile.name);
        Self {
            profile: ProfileStore::new(profile),
            messages: vec![greeting],
            phase: TurnPhase::Idle,
        }
    }

    pub fn profile(&self) -> &BusinessProfile {
        self.profile.get()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Appends the user message and enters `AwaitingResponse`.
    ///
    /// Returns `Ok(None)` for blank input, which is dropped without a trace.
    pub fn begin_turn(&mut self, input: &str) -> Result<Option<PendingTurn>, AppError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        if self.phase == TurnPhase::AwaitingResponse {
            return Err(AppError::TurnInProgress);
        }

        let history = self.messages.clone();
        let user_message = ChatMessage::user(input);
        self.messages.push(user_message.clone());
        self.phase = TurnPhase::AwaitingResponse;

        Ok(Some(PendingTurn {
            history,
            utterance: input.to_string(),
            profile: self.profile.get().clone(),
            user_message,
        }))
    }

    /// Appends the single AI message for the open turn and returns to idle.
    pub fn complete_turn(&mut self, result: Result<AiReply, AiError>) -> Option<ChatMessage> {
        if self.phase != TurnPhase::AwaitingResponse {
            tracing::warn!("reply arrived with no turn in progress, dropping it");
            return None;
        }

        let message = match result {
            Ok(reply) => {
                tracing::info!(
                    intent = reply.intent.as_str(),
                    confidence = reply.confidence,
                    "assistant replied"
                );
                ChatMessage::ai(reply.reply, MessageTag::Classified(reply.intent))
            }
            Err(e) => {
                tracing::warn!(error = %e, "turn failed, sending apology");
                ChatMessage::error(APOLOGY)
            }
        };

        self.messages.push(message.clone());
        self.phase = TurnPhase::Idle;
        Some(message)
    }

    pub fn replace_profile(&mut self, profile: BusinessProfile) -> ProfileChange {
        let change = self.profile.replace(profile);
        self.announce(&change);
        change
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) -> ProfileChange {
        let change = self.profile.update(patch);
        self.announce(&change);
        change
    }

    fn announce(&mut self, change: &ProfileChange) {
        if !change.name_changed {
            return;
        }
        let name = &self.profile.get().name;
        tracing::info!(from = %change.previous_name, to = %name, "business profile switched");
        self.messages.push(ChatMessage::system_note(name));
    }
}

#[derive(Debug, Clone)]
pub enum TurnOutcome {
    Ignored,
    Completed {
        user_message: ChatMessage,
        ai_message: ChatMessage,
    },
}

/// Runs one turn end to end.
///
/// The model call runs on its own task so the turn still completes, and the
/// phase is released, if the caller stops waiting.
pub async fn submit_message(state: &Arc<AppState>, input: &str) -> Result<TurnOutcome, AppError> {
    let pending = match state.session().begin_turn(input)? {
        Some(pending) => pending,
        None => {
            tracing::debug!("ignoring blank submission");
            return Ok(TurnOutcome::Ignored);
        }
    };

    tracing::info!(
        id = %pending.user_message.id,
        history = pending.history.len(),
        "user message received"
    );

    let task_state = Arc::clone(state);
    let user_message = pending.user_message.clone();
    let handle = tokio::spawn(async move {
        let result = generate_reply(
            task_state.llm.as_ref(),
            &pending.history,
            &pending.utterance,
            &pending.profile,
        )
        .await;
        let mut session = task_state.session();
        session.complete_turn(result)
    });

    let ai_message = match handle.await {
        Ok(Some(message)) => message,
        Ok(None) => {
            return Err(AppError::Internal(
                "turn was completed elsewhere".to_string(),
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "reply task failed");
            state
                .session()
                .complete_turn(Err(AiError::Interrupted(e.to_string())))
                .ok_or_else(|| AppError::Internal("turn was completed elsewhere".to_string()))?
        }
    };

    Ok(TurnOutcome::Completed {
        user_message,
        ai_message,
    })
}
