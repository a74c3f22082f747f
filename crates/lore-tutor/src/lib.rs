//! # lore-tutor
//!
//! Answers a learner's free-text question about the current topic through
//! the Cohere chat API.
//!
//! Every call is single-turn: the chat history, connectors, and documents
//! sent are always empty, and nothing is remembered between calls.
//! [`TutorClient::ask`] never fails; errors come back as display text.

use std::time::Duration;

use lore_config::{CohereConfig, LoreConfig};
use lore_core::Topic;
use lore_sources::{SourceError, http::check_response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TutorError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status or rate limit.
    #[error(transparent)]
    Service(#[from] SourceError),

    /// No API key is configured.
    #[error("Cohere API key is not configured")]
    MissingApiKey,

    /// The service replied without any text.
    #[error("empty response from chat service")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    preamble: String,
    chat_history: Vec<serde_json::Value>,
    connectors: Vec<serde_json::Value>,
    documents: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    text: String,
}

/// System preamble binding the assistant to the topic.
#[must_use]
pub fn preamble(topic: &Topic) -> String {
    format!(
        "You are a helpful tutor assisting a learner with the topic '{topic}'. Keep answers brief and educational."
    )
}

/// Client for the conversational AI service.
pub struct TutorClient {
    http: reqwest::Client,
    cohere: CohereConfig,
}

impl TutorClient {
    /// Build a tutor from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TutorError::Http`] if the HTTP client fails to build.
    pub fn from_config(config: &LoreConfig) -> Result<Self, TutorError> {
        let http = reqwest::Client::builder()
            .user_agent(config.general.user_agent.clone())
            .timeout(Duration::from_secs(config.general.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            cohere: config.cohere.clone(),
        })
    }

    /// Answer `question` in the context of `topic`.
    ///
    /// On failure returns `Error from AI agent: {error}` instead of an error.
    pub async fn ask(&self, question: &str, topic: &Topic) -> String {
        match self.try_ask(question, topic).await {
            Ok(answer) => answer,
            Err(error) => {
                tracing::warn!(topic = %topic, %error, "tutor request failed");
                format!("Error from AI agent: {error}")
            }
        }
    }

    /// Fallible variant of [`TutorClient::ask`].
    ///
    /// # Errors
    ///
    /// Returns [`TutorError`] when the key is missing, the request fails, or
    /// the service returns an error or an empty answer.
    pub async fn try_ask(&self, question: &str, topic: &Topic) -> Result<String, TutorError> {
        if !self.cohere.is_configured() {
            return Err(TutorError::MissingApiKey);
        }

        let body = build_request(question, topic, &self.cohere.model);
        tracing::debug!(topic = %topic, "asking tutor");

        let response = self
            .http
            .post(&self.cohere.endpoint)
            .bearer_auth(&self.cohere.api_key)
            .json(&body)
            .send()
            .await?;
        let response = check_response(response).await?;

        let parsed: ChatResponse = response.json().await?;
        extract_text(parsed)
    }
}

fn build_request<'a>(question: &'a str, topic: &Topic, model: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        message: question,
        preamble: preamble(topic),
        chat_history: Vec::new(),
        connectors: Vec::new(),
        documents: Vec::new(),
        model: (!model.is_empty()).then_some(model),
    }
}

fn extract_text(response: ChatResponse) -> Result<String, TutorError> {
    let text = response.text.trim();
    if text.is_empty() {
        Err(TutorError::EmptyResponse)
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn topic() -> Topic {
        Topic::new("Neural Networks").unwrap()
    }

    #[test]
    fn request_is_single_turn_with_preamble() {
        let body = serde_json::to_value(build_request("What is a neuron?", &topic(), "")).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "What is a neuron?",
                "preamble": "You are a helpful tutor assisting a learner with the topic 'Neural Networks'. Keep answers brief and educational.",
                "chat_history": [],
                "connectors": [],
                "documents": [],
            })
        );
    }

    #[test]
    fn model_is_sent_when_configured() {
        let body =
            serde_json::to_value(build_request("Why?", &topic(), "command-r")).unwrap();
        assert_eq!(body["model"], "command-r");
    }

    #[test]
    fn extracts_response_text() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"response_id":"r1","text":" A neuron sums weighted inputs. ","generation_id":"g1","finish_reason":"COMPLETE"}"#,
        )
        .unwrap();
        assert_eq!(extract_text(parsed).unwrap(), "A neuron sums weighted inputs.");
    }

    #[test]
    fn blank_text_is_an_error() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"text":""}"#).unwrap();
        assert!(matches!(extract_text(parsed), Err(TutorError::EmptyResponse)));
    }

    #[tokio::test]
    async fn missing_key_becomes_display_text() {
        let tutor = TutorClient::from_config(&LoreConfig::default()).unwrap();
        let answer = tutor.ask("What is backpropagation?", &topic()).await;
        assert_eq!(answer, "Error from AI agent: Cohere API key is not configured");
    }

    /// Answer one request with `status` and an empty body, after reading the
    /// full request so the client never sees a reset.
    async fn serve_status_once(status: &'static str, extra_header: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let read = stream.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..read]);
                let text = String::from_utf8_lossy(&received);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if received.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\n{extra_header}content-length: 0\r\nconnection: close\r\n\r\n"
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        format!("http://{addr}/v1/chat")
    }

    fn tutor_at(endpoint: String) -> TutorClient {
        let mut config = LoreConfig::default();
        config.cohere.api_key = String::from("co-test");
        config.cohere.endpoint = endpoint;
        TutorClient::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn rate_limit_uses_shared_status_handling() {
        let endpoint = serve_status_once("429 Too Many Requests", "retry-after: 7\r\n").await;
        let err = tutor_at(endpoint).try_ask("Why?", &topic()).await.unwrap_err();

        assert!(matches!(
            err,
            TutorError::Service(SourceError::RateLimited { retry_after_secs: 7 })
        ));
        assert_eq!(err.to_string(), "rate limited, retry after 7s");
    }

    #[tokio::test]
    async fn server_error_becomes_display_text() {
        let endpoint = serve_status_once("503 Service Unavailable", "").await;
        let answer = tutor_at(endpoint).ask("Why?", &topic()).await;
        assert!(answer.starts_with("Error from AI agent: API error (503)"));
    }

    #[tokio::test]
    async fn unreachable_service_becomes_display_text() {
        let mut config = LoreConfig::default();
        config.cohere.api_key = String::from("co-test");
        config.cohere.endpoint = String::from("http://127.0.0.1:9/v1/chat");
        config.general.timeout_secs = 2;
        let tutor = TutorClient::from_config(&config).unwrap();

        let answer = tutor.ask("What is backpropagation?", &topic()).await;
        assert!(answer.starts_with("Error from AI agent: HTTP error"));
    }
}
