//! Submission state machine: classify, score, persist, then report.

use std::{fmt, sync::Arc};

use tracing::{debug, info, instrument, warn};

use crate::{
    classify::{self, Answer, StarRating, Topic},
    error::TriageError,
    llm::Completer,
    store::{CommentRecord, CommentStore},
};

pub const EMPTY_COMMENT_WARNING: &str = "Por favor, introduce un comentario.";

/// Working state that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classifying,
    Scoring,
    Persisting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Classifying => "classifying",
            Self::Scoring => "scoring",
            Self::Persisting => "persisting",
        })
    }
}

/// Position of one submission in the classify → score → persist chain.
#[derive(Debug)]
pub enum SubmissionState {
    /// Nothing submitted; carries the warning when the input was blank.
    Idle { warning: Option<&'static str> },
    Classifying,
    Scoring { topic: Answer<Topic> },
    Persisting { record: CommentRecord, rating: StarRating },
    /// Written; `confirmation` comes from the store that took the record.
    Done {
        record: CommentRecord,
        rating: StarRating,
        confirmation: &'static str,
    },
    Failed { stage: Stage, error: TriageError },
}

impl SubmissionState {
    /// Entry state for `comment`; blank input never leaves `Idle`.
    pub fn start(comment: &str) -> Self {
        if comment.trim().is_empty() {
            Self::Idle {
                warning: Some(EMPTY_COMMENT_WARNING),
            }
        } else {
            Self::Classifying
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Idle { .. } | Self::Done { .. } | Self::Failed { .. })
    }

    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Idle { warning } => warning.map(str::to_string),
            Self::Done { confirmation, .. } => Some(confirmation.to_string()),
            Self::Failed { error, .. } => Some(format!("Error: {error}")),
            _ => None,
        }
    }
}

/// Runs submissions against injected completion and store handles.
///
/// Dropping the future returned by [`Submitter::submit`] cancels any
/// in-flight completion request. A write that has started is detached and
/// always runs to completion, so a record is either fully written or absent.
#[derive(Clone)]
pub struct Submitter {
    completer: Arc<dyn Completer>,
    store: Arc<dyn CommentStore>,
}

impl Submitter {
    pub fn new(completer: Arc<dyn Completer>, store: Arc<dyn CommentStore>) -> Self {
        Self { completer, store }
    }

    /// Drive one comment from `Idle` to a terminal state.
    #[instrument(skip_all, fields(chars = comment.chars().count()))]
    pub async fn submit(&self, comment: &str) -> SubmissionState {
        let mut state = SubmissionState::start(comment);
        while !state.is_terminal() {
            state = self.step(comment, state).await;
        }
        match &state {
            SubmissionState::Idle { .. } => warn!("blank comment ignored"),
            SubmissionState::Done { record, rating, .. } => {
                info!(id = %record.id, topic = %record.topico, stars = ?rating.stars(), "comment stored")
            }
            SubmissionState::Failed { stage, error } => warn!(%stage, %error, "submission failed"),
            _ => {}
        }
        state
    }

    /// Perform the work of one non-terminal state.
    pub async fn step(&self, comment: &str, state: SubmissionState) -> SubmissionState {
        match state {
            SubmissionState::Classifying => {
                match classify::classify_topic(self.completer.as_ref(), comment).await {
                    Ok(topic) => SubmissionState::Scoring { topic },
                    Err(error) => SubmissionState::Failed {
                        stage: Stage::Classifying,
                        error,
                    },
                }
            }
            SubmissionState::Scoring { topic } => {
                match classify::score_rating(self.completer.as_ref(), comment).await {
                    Ok(rating) => SubmissionState::Persisting {
                        record: CommentRecord::new(comment, &topic, &rating),
                        rating: rating.value,
                    },
                    Err(error) => SubmissionState::Failed {
                        stage: Stage::Scoring,
                        error,
                    },
                }
            }
            SubmissionState::Persisting { record, rating } => {
                debug!(id = %record.id, "persisting");
                match self.persist_detached(record.clone()).await {
                    Ok(()) => SubmissionState::Done {
                        record,
                        rating,
                        confirmation: self.store.saved_message(),
                    },
                    Err(error) => SubmissionState::Failed {
                        stage: Stage::Persisting,
                        error,
                    },
                }
            }
            terminal => terminal,
        }
    }

    async fn persist_detached(&self, record: CommentRecord) -> Result<(), TriageError> {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move { store.create_item(&record).await })
            .await
            .map_err(|e| TriageError::StoreTask(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_input_stays_idle_with_warning() {
        let state = SubmissionState::start(" \n\t ");
        assert!(state.is_terminal());
        assert_eq!(state.user_message().as_deref(), Some(EMPTY_COMMENT_WARNING));
    }

    #[test]
    fn non_blank_input_starts_classifying() {
        let state = SubmissionState::start("hola");
        assert!(matches!(state, SubmissionState::Classifying));
        assert!(!state.is_terminal());
        assert!(state.user_message().is_none());
    }

    #[test]
    fn failure_message_includes_error() {
        let state = SubmissionState::Failed {
            stage: Stage::Scoring,
            error: TriageError::Api {
                status: 500,
                body: "boom".into(),
            },
        };
        assert_eq!(
            state.user_message().as_deref(),
            Some("Error: completion API returned 500: boom")
        );
    }
}
