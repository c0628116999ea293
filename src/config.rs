use std::env;

use crate::models::{template, BusinessProfile};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub llm_provider: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub default_template: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            default_template: env::var("DEFAULT_TEMPLATE")
                .unwrap_or_else(|_| template::DEFAULT_TEMPLATE.to_string()),
        }
    }

    /// Profile the session starts with.
    pub fn initial_profile(&self) -> BusinessProfile {
        match template::find_template(&self.default_template) {
            Some(t) => t.profile(),
            None => {
                tracing::warn!(
                    template = %self.default_template,
                    "unknown DEFAULT_TEMPLATE, falling back to {}",
                    template::DEFAULT_TEMPLATE
                );
                template::default_profile()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(default_template: &str) -> AppConfig {
        AppConfig {
            port: 3000,
            llm_provider: "ollama".to_string(),
            gemini_api_key: String::new(),
            gemini_model: "gemini-2.5-flash".to_string(),
            groq_api_key: String::new(),
            groq_model: "llama-3.3-70b-versatile".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
            default_template: default_template.to_string(),
        }
    }

    #[test]
    fn test_initial_profile_from_template() {
        assert_eq!(
            config("mechanic").initial_profile().name,
            "Mike's Mobile Mechanics"
        );
    }

    #[test]
    fn test_unknown_template_falls_back() {
        assert_eq!(
            config("florist").initial_profile().name,
            "Fresh Cuts Barbershop"
        );
    }
}
