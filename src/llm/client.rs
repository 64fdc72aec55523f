//! `reqwest` implementation of [`Completer`] for Azure OpenAI style deployments.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TriageError, TriageResult};

use super::{Completer, MAX_TOKENS, SYSTEM_MESSAGE};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub messages: [ChatMessage<'a>; 2],
    pub max_tokens: u32,
    pub n: u32,
    pub stop: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl<'a> ChatRequest<'a> {
    /// Two-message exchange asking for exactly one short candidate.
    pub fn new(prompt: &'a str) -> Self {
        Self {
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            n: 1,
            stop: None,
        }
    }
}

/// Chat-completions client bound to one deployment URL and key.
#[derive(Clone)]
pub struct ChatClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> TriageResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("comment-rater/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TriageError::Transport)?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Completer for ChatClient {
    async fn complete(&self, prompt: &str) -> TriageResult<String> {
        let body = ChatRequest::new(prompt);
        let response = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(TriageError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "completion endpoint returned an error");
            return Err(TriageError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ChatResponse = response.json().await.map_err(TriageError::Transport)?;
        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or(TriageError::EmptyCompletion)?;
        debug!(chars = content.chars().count(), "completion received");
        Ok(content.trim().to_string())
    }
}
