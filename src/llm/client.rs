//! OpenAI Client - Integration with an OpenAI-style chat completions API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::GatewayResult;

/// Opaque text-completion interface the generator talks to.
///
/// Kept as a trait so tests can substitute a canned model; the production
/// implementation is [`OpenAiClient`].
#[async_trait]
pub trait ChatCompletionModel: Send + Sync {
    /// Send one prompt, return the model's raw text response.
    async fn complete(&self, prompt: &str) -> GatewayResult<String>;
}

/// Chat completions API client
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiClient {
    /// Create a new client. Schema descriptions can be large, so the
    /// configured model must support long-context prompts.
    pub fn new(base_url: Option<String>, api_key: String, model: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com".to_string()),
            api_key,
            model: model.unwrap_or_else(|| "gpt-4".to_string()),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ChatCompletionModel for OpenAiClient {
    async fn complete(&self, prompt: &str) -> GatewayResult<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let chat_response: ChatResponse = response.json().await?;
        Ok(extract_content(chat_response))
    }
}

/// A response with no choices counts as "no usable text", not an error;
/// the pipeline substitutes its apology string for empty output.
fn extract_content(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_content_takes_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [
                {"message": {"role": "assistant", "content": "SELECT 1"}},
                {"message": {"role": "assistant", "content": "SELECT 2"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(response), "SELECT 1");
    }

    #[test]
    fn test_extract_content_empty_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(extract_content(response), "");
    }

    #[test]
    fn test_chat_request_wire_format() {
        let request = ChatRequest {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            temperature: 0.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }
}
