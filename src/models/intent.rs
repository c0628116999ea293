use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Classification the model attaches to each reply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Greeting,
    Inquiry,
    BookingRequest,
    LeadCollection,
    Handoff,
    Other,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Greeting,
        Intent::Inquiry,
        Intent::BookingRequest,
        Intent::LeadCollection,
        Intent::Handoff,
        Intent::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "GREETING",
            Intent::Inquiry => "INQUIRY",
            Intent::BookingRequest => "BOOKING_REQUEST",
            Intent::LeadCollection => "LEAD_COLLECTION",
            Intent::Handoff => "HANDOFF",
            Intent::Other => "OTHER",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Intent::ALL.into_iter().find(|i| i.as_str() == s)
    }
}

/// Structured reply returned by the model for one turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiReply {
    pub reply: String,
    pub intent: Intent,
    pub confidence: f64,
}

/// Label stored on a chat message.
///
/// Besides the classified intents there are two sentinels: `SYSTEM` for
/// inline notices and `ERROR` for the apology shown after a failed turn.
/// Anything else read back from the wire is kept verbatim so rendering never
/// has to fail on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTag {
    Classified(Intent),
    System,
    Error,
    Unrecognized(String),
}

impl MessageTag {
    pub fn as_str(&self) -> &str {
        match self {
            MessageTag::Classified(intent) => intent.as_str(),
            MessageTag::System => "SYSTEM",
            MessageTag::Error => "ERROR",
            MessageTag::Unrecognized(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "SYSTEM" => MessageTag::System,
            "ERROR" => MessageTag::Error,
            other => Intent::parse(other)
                .map(MessageTag::Classified)
                .unwrap_or_else(|| MessageTag::Unrecognized(other.to_string())),
        }
    }

    /// Text for the badge under an AI bubble; sentinels have none.
    pub fn badge_label(&self) -> Option<String> {
        match self {
            MessageTag::System | MessageTag::Error => None,
            MessageTag::Classified(_) | MessageTag::Unrecognized(_) => {
                let label = self.as_str().trim();
                if label.is_empty() {
                    None
                } else {
                    Some(label.replace('_', " "))
                }
            }
        }
    }
}

impl From<Intent> for MessageTag {
    fn from(intent: Intent) -> Self {
        MessageTag::Classified(intent)
    }
}

impl fmt::Display for MessageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(MessageTag::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_wire_names() {
        let json = serde_json::to_string(&Intent::BookingRequest).unwrap();
        assert_eq!(json, "\"BOOKING_REQUEST\"");
        let parsed: Intent = serde_json::from_str("\"LEAD_COLLECTION\"").unwrap();
        assert_eq!(parsed, Intent::LeadCollection);
    }

    #[test]
    fn test_intent_rejects_unknown_value() {
        assert!(serde_json::from_str::<Intent>("\"COMPLAINT\"").is_err());
        assert!(serde_json::from_str::<Intent>("\"greeting\"").is_err());
    }

    #[test]
    fn test_tag_parse_sentinels_and_unknown() {
        assert_eq!(MessageTag::parse("SYSTEM"), MessageTag::System);
        assert_eq!(MessageTag::parse("ERROR"), MessageTag::Error);
        assert_eq!(
            MessageTag::parse("HANDOFF"),
            MessageTag::Classified(Intent::Handoff)
        );
        assert_eq!(
            MessageTag::parse("SMALL_TALK"),
            MessageTag::Unrecognized("SMALL_TALK".to_string())
        );
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(
            MessageTag::from(Intent::BookingRequest).badge_label().as_deref(),
            Some("BOOKING REQUEST")
        );
        assert_eq!(MessageTag::System.badge_label(), None);
        assert_eq!(MessageTag::Error.badge_label(), None);
        assert_eq!(
            MessageTag::Unrecognized("SMALL_TALK".into()).badge_label().as_deref(),
            Some("SMALL TALK")
        );
        assert_eq!(MessageTag::Unrecognized("  ".into()).badge_label(), None);
    }

    #[test]
    fn test_tag_serializes_as_plain_string() {
        let json = serde_json::to_string(&MessageTag::Error).unwrap();
        assert_eq!(json, "\"ERROR\"");
        let tag: MessageTag = serde_json::from_str("\"INQUIRY\"").unwrap();
        assert_eq!(tag, MessageTag::Classified(Intent::Inquiry));
    }
}
