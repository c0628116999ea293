use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ChatMessage, MessageTag, Sender};
use crate::services::chat::{ChatSession, TurnPhase};
use crate::services::format::{render_markup, strip_markup};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Bubble {
    Bubble,
    Pill,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageView {
    pub id: String,
    pub sender: Sender,
    pub align: Align,
    pub style: Bubble,
    pub text: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatView {
    pub business_name: String,
    pub messages: Vec<MessageView>,
    pub typing: bool,
    pub input_enabled: bool,
}

pub fn render_message(msg: &ChatMessage) -> MessageView {
    let (align, style, text, badge) = match (msg.sender, &msg.intent) {
        (Sender::User, _) => (Align::Right, Bubble::Bubble, msg.text.clone(), None),
        (Sender::Ai, Some(MessageTag::System)) => {
            (Align::Center, Bubble::Pill, strip_markup(&msg.text), None)
        }
        (Sender::Ai, tag) => (
            Align::Left,
            Bubble::Bubble,
            msg.text.clone(),
            tag.as_ref().and_then(MessageTag::badge_label),
        ),
    };

    MessageView {
        id: msg.id.clone(),
        sender: msg.sender,
        align,
        style,
        html: render_markup(&text),
        text,
        badge,
        timestamp: msg.timestamp,
    }
}

pub fn chat_view(session: &ChatSession) -> ChatView {
    let awaiting = session.phase() == TurnPhase::AwaitingResponse;
    ChatView {
        business_name: session.profile().name.clone(),
        messages: session.messages().iter().map(render_message).collect(),
        typing: awaiting,
        input_enabled: !awaiting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intent;

    #[test]
    fn test_user_message_right_aligned_without_badge() {
        let view = render_message(&ChatMessage::user("hi **there**"));
        assert_eq!(view.align, Align::Right);
        assert_eq!(view.style, Bubble::Bubble);
        assert!(view.badge.is_none());
        assert_eq!(view.html, "<p>hi <strong>there</strong></p>");
    }

    #[test]
    fn test_ai_message_shows_intent_badge() {
        let msg = ChatMessage::ai("Sure!".into(), Intent::BookingRequest.into());
        let view = render_message(&msg);
        assert_eq!(view.align, Align::Left);
        assert_eq!(view.badge.as_deref(), Some("BOOKING REQUEST"));
    }

    #[test]
    fn test_error_message_has_no_badge() {
        let view = render_message(&ChatMessage::error("Sorry"));
        assert_eq!(view.align, Align::Left);
        assert!(view.badge.is_none());
    }

    #[test]
    fn test_system_note_is_centered_pill_without_stars() {
        let view = render_message(&ChatMessage::system_note("Mike's Mobile Mechanics"));
        assert_eq!(view.align, Align::Center);
        assert_eq!(view.style, Bubble::Pill);
        assert!(!view.text.contains('*'));
        assert!(view.badge.is_none());
    }

    #[test]
    fn test_unrecognized_tag_still_renders() {
        let mut msg = ChatMessage::ai("Hmm".into(), MessageTag::Unrecognized("WEIRD_ONE".into()));
        let view = render_message(&msg);
        assert_eq!(view.badge.as_deref(), Some("WEIRD ONE"));

        msg.intent = None;
        assert!(render_message(&msg).badge.is_none());
    }
}
