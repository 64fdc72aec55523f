//! HTTP route handlers for Axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use askama::Template;
use tracing::error;

use crate::{
    api::types::{ApiError, CommentDto, CommentInput},
    submission::{SubmissionState, EMPTY_COMMENT_WARNING},
    ui::IndexPage,
};

use super::AppState;

pub async fn index() -> Response {
    render(IndexPage::empty())
}

pub async fn submit_form(State(state): State<AppState>, Form(input): Form<CommentInput>) -> Response {
    let outcome = state.submitter.submit(&input.comentario).await;
    render(IndexPage::from_state(&input.comentario, &outcome))
}

pub async fn submit_json(
    State(state): State<AppState>,
    Json(input): Json<CommentInput>,
) -> Result<(StatusCode, Json<CommentDto>), ApiError> {
    match state.submitter.submit(&input.comentario).await {
        SubmissionState::Done { record, rating, .. } => {
            Ok((StatusCode::CREATED, Json(CommentDto::new(record, rating.stars()))))
        }
        SubmissionState::Failed { stage, error } => Err(ApiError::Failed { stage, error }),
        SubmissionState::Idle { warning } => {
            Err(ApiError::BlankComment(warning.unwrap_or(EMPTY_COMMENT_WARNING)))
        }
        other => {
            error!(?other, "submission stopped in a working state");
            Err(ApiError::Incomplete)
        }
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

fn render(page: IndexPage) -> Response {
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(%err, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}
