//! Client for the hosted chat-completions endpoint.

pub mod client;

use async_trait::async_trait;

use crate::error::TriageResult;

pub use client::ChatClient;

/// System framing sent ahead of every prompt.
pub const SYSTEM_MESSAGE: &str = "Eres un asistente útil.";

/// Generation cap for both the topic and the rating requests.
pub const MAX_TOKENS: u32 = 10;

/// Turns a prompt into the trimmed text of a single completion.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> TriageResult<String>;
}
