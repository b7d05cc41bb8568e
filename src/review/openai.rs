use serde::{Deserialize, Serialize};

use super::ReviewError;
use crate::config::CompletionConfig;

/// Completion service abstraction (allows mocking for tests).
pub trait CompletionClient: Send + Sync {
    fn complete(&self, system: &str, user: &str) -> Result<String, ReviewError>;
}

/// HTTP client for an OpenAI-compatible chat-completion endpoint.
///
/// Requests pin a low temperature and a JSON response format so repeated
/// calls on similar input keep a stable output shape.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    pub fn new(config: &CompletionConfig) -> Result<Self, ReviewError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReviewError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
            timeout_secs: config.timeout_secs,
        })
    }
}

/// Request body for `/v1/chat/completions`
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Response body from `/v1/chat/completions`
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, ReviewError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: self.temperature,
            response_format: ResponseFormat { kind: "json_object" },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ReviewError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ReviewError::HttpClient(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    ReviewError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReviewError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| ReviewError::ResponseParsing(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ReviewError::EmptyResponse)
    }
}

/// Mock completion client for tests — returns a configurable response.
pub struct MockCompletionClient {
    response: String,
}

impl MockCompletionClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, ReviewError> {
        Ok(self.response.clone())
    }
}

/// Mock completion client that always fails with a transport error.
pub struct FailingCompletionClient;

impl CompletionClient for FailingCompletionClient {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, ReviewError> {
        Err(ReviewError::Connection("http://localhost:9".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> CompletionConfig {
        CompletionConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.3,
            timeout_secs: 5,
        }
    }

    #[test]
    fn mock_client_returns_configured_response() {
        let client = MockCompletionClient::new("{\"ok\": true}");
        let result = client.complete("system", "user").unwrap();
        assert_eq!(result, "{\"ok\": true}");
    }

    #[test]
    fn failing_client_reports_connection_error() {
        let result = FailingCompletionClient.complete("system", "user");
        assert!(matches!(result, Err(ReviewError::Connection(_))));
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = OpenAiClient::new(&config("https://api.openai.com/")).unwrap();
        assert_eq!(client.base_url, "https://api.openai.com");
    }

    #[test]
    fn client_keeps_configured_model_and_temperature() {
        let client = OpenAiClient::new(&config("https://api.openai.com")).unwrap();
        assert_eq!(client.model, "gpt-4o-mini");
        assert!((client.temperature - 0.3).abs() < f32::EPSILON);
    }
}
