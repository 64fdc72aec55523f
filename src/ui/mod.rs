//! Server-rendered form page.

use askama::Template;

use crate::{store::CommentRecord, submission::SubmissionState};

pub const TITLE: &str = "Clasificación y Calificación de Comentarios";

#[derive(Debug, Default, Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
    /// Text kept in the textarea after a warning or failure.
    pub draft: String,
    pub result: Option<CommentRecord>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl IndexPage {
    pub fn empty() -> Self {
        Self {
            title: TITLE,
            ..Self::default()
        }
    }

    /// Page shown after a submission reached `state`.
    pub fn from_state(comment: &str, state: &SubmissionState) -> Self {
        let mut page = Self::empty();
        let message = state.user_message();
        match state {
            SubmissionState::Done { record, .. } => {
                page.result = Some(record.clone());
                page.success = message;
            }
            SubmissionState::Idle { .. } => page.warning = message,
            SubmissionState::Failed { .. } => {
                page.draft = comment.to_string();
                page.error = message;
            }
            _ => {}
        }
        page
    }
}
