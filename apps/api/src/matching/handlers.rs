//! Axum route handlers for the Match API.

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::report::MatchResponse;
use crate::state::AppState;

/// Both fields are optional at the JSON level so a missing field is a validation
/// error with our own message rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

/// POST /api/v1/match
///
/// Scores a resume against a job description. The scorer runs on a blocking thread
/// under the configured timeout; a panic or timeout never leaks a partial report.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
        _ => AppError::Validation(rejection.body_text()),
    })?;
    let resume_text = request.resume_text.unwrap_or_default();
    let job_description = request.job_description.unwrap_or_default();
    if resume_text.is_empty() || job_description.is_empty() {
        return Err(AppError::Validation(
            "Resume text and job description are required".to_string(),
        ));
    }

    let scorer = Arc::clone(&state.scorer);
    let task = tokio::task::spawn_blocking(move || scorer.score(&resume_text, &job_description));

    let report = match tokio::time::timeout(state.config.match_timeout(), task).await {
        Err(_) => return Err(AppError::Timeout),
        Ok(Err(join_err)) => {
            return Err(AppError::Internal(anyhow!(
                "match task ({}) failed: {join_err}",
                state.scorer.backend()
            )))
        }
        Ok(Ok(result)) => result?,
    };

    Ok(Json(MatchResponse::from(&report)))
}
