//! Request and response shapes for the form and JSON endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{error::TriageError, store::CommentRecord, submission::Stage};

/// Body of both the HTML form post and the JSON endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentInput {
    #[serde(default)]
    pub comentario: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: String,
    pub comentario: String,
    pub topico: String,
    pub estrellas: String,
    /// Star count, or `null` when the scorer did not answer with one to five stars.
    pub rating: Option<u8>,
}

impl CommentDto {
    pub fn new(record: CommentRecord, rating: Option<u8>) -> Self {
        Self {
            id: record.id,
            comentario: record.comentario,
            topico: record.topico,
            estrellas: record.estrellas,
            rating,
        }
    }
}

/// Failure of the JSON endpoint, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BlankComment(&'static str),
    Failed { stage: Stage, error: TriageError },
    Incomplete,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BlankComment(warning) => (StatusCode::UNPROCESSABLE_ENTITY, warning.to_string()),
            ApiError::Failed { stage, error } => {
                let status = match stage {
                    Stage::Persisting => StatusCode::SERVICE_UNAVAILABLE,
                    Stage::Classifying | Stage::Scoring if error.is_completion() => {
                        StatusCode::BAD_GATEWAY
                    }
                    Stage::Classifying | Stage::Scoring => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, error.to_string())
            }
            ApiError::Incomplete => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "submission did not finish".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
