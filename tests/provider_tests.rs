use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use click2chatt::models::{template, ChatMessage, Intent};
use click2chatt::services::ai::gemini::GeminiProvider;
use click2chatt::services::ai::groq::GroqProvider;
use click2chatt::services::ai::ollama::OllamaProvider;
use click2chatt::services::ai::reply::generate_reply;
use click2chatt::services::ai::{AiError, LlmProvider, Message};

fn user(content: &str) -> Vec<Message> {
    vec![Message {
        role: "user".to_string(),
        content: content.to_string(),
    }]
}

#[tokio::test]
async fn test_gemini_request_shape_and_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "be nice" }] },
            "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"reply\":\"Hey\",\"intent\":\"GREETING\",\"confidence\":0.9}" }] }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new("test-key".to_string(), "gemini-test".to_string())
        .with_base_url(mock_server.uri());

    let text = provider.chat("be nice", &user("hi")).await.unwrap();
    assert!(text.contains("GREETING"));
}

#[tokio::test]
async fn test_gemini_maps_assistant_role_to_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "contents": [
                { "role": "model", "parts": [{ "text": "Hi there!" }] },
                { "role": "user", "parts": [{ "text": "book me" }] }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{}" }] } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new("k".to_string(), "m".to_string())
        .with_base_url(mock_server.uri());
    let messages = vec![
        Message {
            role: "assistant".to_string(),
            content: "Hi there!".to_string(),
        },
        Message {
            role: "user".to_string(),
            content: "book me".to_string(),
        },
    ];

    assert_eq!(provider.chat("sys", &messages).await.unwrap(), "{}");
}

#[tokio::test]
async fn test_gemini_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "message": "API key not valid" }
        })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new("bad".to_string(), "m".to_string())
        .with_base_url(mock_server.uri());
    let err = provider.chat("sys", &user("hi")).await.unwrap_err();
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn test_gemini_missing_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new("k".to_string(), "m".to_string())
        .with_base_url(mock_server.uri());
    assert!(provider.chat("sys", &user("hi")).await.is_err());
}

#[tokio::test]
async fn test_groq_request_shape_and_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer groq-key"))
        .and(body_partial_json(json!({
            "model": "llama-test",
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": "sys" },
                { "role": "user", "content": "hi" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "{\"reply\":\"Yo\",\"intent\":\"GREETING\",\"confidence\":1}" } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GroqProvider::new("groq-key".to_string(), "llama-test".to_string())
        .with_base_url(mock_server.uri());
    let text = provider.chat("sys", &user("hi")).await.unwrap();
    assert!(text.contains("\"Yo\""));
}

#[tokio::test]
async fn test_ollama_request_shape_and_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "llama3.2",
            "stream": false,
            "format": "json"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": { "role": "assistant", "content": "{\"reply\":\"Hello\",\"intent\":\"OTHER\",\"confidence\":0.3}" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OllamaProvider::new(mock_server.uri(), "llama3.2".to_string());
    let text = provider.chat("sys", &user("hi")).await.unwrap();
    assert!(text.contains("Hello"));
}

#[tokio::test]
async fn test_generate_reply_through_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"reply\":\"Tuesday at 3pm works.\",\"intent\":\"BOOKING_REQUEST\",\"confidence\":0.82}" }] } }]
        })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new("k".to_string(), "m".to_string())
        .with_base_url(mock_server.uri());
    let profile = template::default_profile();
    let history = vec![ChatMessage::greeting(&profile.name)];

    let reply = generate_reply(&provider, &history, "Can I come Tuesday?", &profile)
        .await
        .unwrap();
    assert_eq!(reply.intent, Intent::BookingRequest);
    assert_eq!(reply.reply, "Tuesday at 3pm works.");
}

#[tokio::test]
async fn test_generate_reply_unreachable_provider() {
    let provider = OllamaProvider::new("http://127.0.0.1:9".to_string(), "llama3.2".to_string());
    let profile = template::default_profile();
    let err = generate_reply(&provider, &[], "hello", &profile)
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Transport(_)));
}
