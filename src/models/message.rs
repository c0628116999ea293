use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::intent::MessageTag;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// Role name used when replaying history to the model.
    pub fn role(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Ai => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<MessageTag>,
}

impl ChatMessage {
    fn new(prefix: &str, text: String, sender: Sender, intent: Option<MessageTag>) -> Self {
        Self {
            id: format!("{prefix}-{}", uuid::Uuid::new_v4()),
            text,
            sender,
            timestamp: Utc::now(),
            intent,
        }
    }

    pub fn greeting(business_name: &str) -> Self {
        Self::new(
            "init",
            format!(
                "Hi there! Thanks for reaching out to {business_name}. How can I help you today?"
            ),
            Sender::Ai,
            Some(MessageTag::Classified(super::Intent::Greeting)),
        )
    }

    pub fn user(text: &str) -> Self {
        Self::new("usr", text.to_string(), Sender::User, None)
    }

    pub fn ai(text: String, tag: MessageTag) -> Self {
        Self::new("ai", text, Sender::Ai, Some(tag))
    }

    pub fn error(text: &str) -> Self {
        Self::new("err", text.to_string(), Sender::Ai, Some(MessageTag::Error))
    }

    pub fn system_note(business_name: &str) -> Self {
        Self::new(
            "sys",
            format!("*System Note: You are now chatting with {business_name}.*"),
            Sender::Ai,
            Some(MessageTag::System),
        )
    }

    pub fn is_system(&self) -> bool {
        matches!(self.intent, Some(MessageTag::System))
    }
}
