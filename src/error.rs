//! Error taxonomy shared by the completion client, the stores and the orchestrator.

use thiserror::Error;

/// Everything that can go wrong while classifying, scoring or persisting a comment.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("completion request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("completion response contained no message content")]
    EmptyCompletion,

    #[error("document store rejected the request: {status} - {body}")]
    StoreStatus { status: u16, body: String },

    #[error("document store unreachable: {0}")]
    StoreTransport(#[source] reqwest::Error),

    #[error("invalid document store key: {0}")]
    InvalidStoreKey(String),

    #[error("could not serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("local store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store write task aborted: {0}")]
    StoreTask(String),
}

impl TriageError {
    /// True for failures of the completion endpoint or of its output.
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Transport(_) | Self::EmptyCompletion)
    }
}

pub type TriageResult<T> = Result<T, TriageError>;
