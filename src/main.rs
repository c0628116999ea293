use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use click2chatt::config::AppConfig;
use click2chatt::handlers;
use click2chatt::services::ai::gemini::GeminiProvider;
use click2chatt::services::ai::groq::GroqProvider;
use click2chatt::services::ai::ollama::OllamaProvider;
use click2chatt::services::ai::LlmProvider;
use click2chatt::services::chat::ChatSession;
use click2chatt::state::AppState;

fn build_llm(config: &AppConfig) -> anyhow::Result<Box<dyn LlmProvider>> {
    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "gemini" => {
            anyhow::ensure!(
                !config.gemini_api_key.is_empty(),
                "GEMINI_API_KEY must be set when LLM_PROVIDER=gemini"
            );
            tracing::info!("using Gemini LLM provider (model: {})", config.gemini_model);
            Box::new(GeminiProvider::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
            ))
        }
        "groq" => {
            anyhow::ensure!(
                !config.groq_api_key.is_empty(),
                "GROQ_API_KEY must be set when LLM_PROVIDER=groq"
            );
            tracing::info!("using Groq LLM provider (model: {})", config.groq_model);
            Box::new(GroqProvider::new(
                config.groq_api_key.clone(),
                config.groq_model.clone(),
            ))
        }
        "ollama" => {
            tracing::info!(
                "using Ollama LLM provider (url: {}, model: {})",
                config.ollama_url,
                config.ollama_model
            );
            Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            ))
        }
        other => anyhow::bail!("unknown LLM_PROVIDER {other:?} (expected gemini, groq or ollama)"),
    };
    Ok(llm)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let llm = build_llm(&config)?;

    let profile = config.initial_profile();
    tracing::info!(business = %profile.name, "starting chat session");

    let state = Arc::new(AppState::new(llm, ChatSession::new(profile)));
    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
