use serde::de::DeserializeOwned;

use crate::models::{AiReply, BusinessProfile, ChatMessage};
use crate::services::ai::{AiError, LlmProvider, Message};

const SYSTEM_PROMPT: &str = r#"You are the friendly front-desk assistant for the small business described below. You chat with website visitors, answer their questions and help them book appointments or leave their details.

Only use the business facts given in the context. If something is not covered (a service, a price, an opening time), say you are not sure and offer to pass the question to the team. Never invent services or prices.

Classify the visitor's latest message into exactly one intent:
- "GREETING": hello, small talk, opening the conversation
- "INQUIRY": questions about services, pricing, hours, location or policies
- "BOOKING_REQUEST": wants to book, reschedule or check availability
- "LEAD_COLLECTION": is sharing or being asked for name, phone or email so the team can follow up
- "HANDOFF": wants a human, is upset, or the request is outside what you can handle
- "OTHER": anything else

Return ONLY valid JSON (no markdown, no explanation) with this exact structure:
{
  "reply": "Your reply to the visitor",
  "intent": "GREETING|INQUIRY|BOOKING_REQUEST|LEAD_COLLECTION|HANDOFF|OTHER",
  "confidence": 0.0
}

"confidence" is a number between 0 and 1 for how sure you are of the intent.
Keep replies short and conversational. Light markdown (bold, lists) is fine inside "reply".
"#;

pub fn build_system_prompt(profile: &BusinessProfile) -> String {
    format!("{SYSTEM_PROMPT}\nBusiness context:\n{}", profile.to_prompt())
}

/// One model call for one turn: history is everything before `utterance`.
pub async fn generate_reply(
    llm: &dyn LlmProvider,
    history: &[ChatMessage],
    utterance: &str,
    profile: &BusinessProfile,
) -> Result<AiReply, AiError> {
    let utterance = utterance.trim();
    if utterance.is_empty() {
        return Err(AiError::EmptyUtterance);
    }

    let mut messages: Vec<Message> = history
        .iter()
        .map(|m| Message {
            role: m.sender.role().to_string(),
            content: m.text.clone(),
        })
        .collect();

    messages.push(Message {
        role: "user".to_string(),
        content: utterance.to_string(),
    });

    let system = build_system_prompt(profile);

    let response = llm
        .chat(&system, &messages)
        .await
        .map_err(|e| AiError::Transport(format!("{e:#}")))?;

    parse_reply_response(&response)
}

pub fn parse_reply_response(response: &str) -> Result<AiReply, AiError> {
    parse_json_payload::<AiReply>(response)
}

// Models sometimes wrap the object in a code fence or a sentence. The wrapping
// is stripped; the object itself still has to match the schema exactly.
fn parse_json_payload<T: DeserializeOwned>(response: &str) -> Result<T, AiError> {
    let first_err = match serde_json::from_str::<T>(response) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let trimmed = response.trim();
    let cleaned = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Ok(value) = serde_json::from_str::<T>(cleaned) {
        return Ok(value);
    }

    if let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<T>(&cleaned[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(AiError::MalformedResponse(first_err.to_string()))
}
