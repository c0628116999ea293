pub mod intent;
pub mod message;
pub mod profile;
pub mod template;

pub use intent::{AiReply, Intent, MessageTag};
pub use message::{ChatMessage, Sender};
pub use profile::{parse_services, BusinessProfile, ProfilePatch};
pub use template::Template;
