//! Onboarding answer endpoints.
//!
//! - `GET /api/profiles/:profile_id/answers` — current answers
//! - `PUT /api/profiles/:profile_id/answers` — upsert a batch of answers

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{require_user, AppState};
use crate::catalog;
use crate::models::Answer;
use crate::pipeline::owned_profile;

#[derive(Serialize)]
pub struct AnswersResponse {
    pub answers: Vec<Answer>,
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<AnswersResponse>, ApiError> {
    let user_id = require_user(&headers)?;
    owned_profile(state.profiles.as_ref(), user_id, profile_id)?;
    let answers = state.answers.get_answers(profile_id)?;
    Ok(Json(AnswersResponse { answers }))
}

#[derive(Deserialize)]
pub struct AnswerEntry {
    pub question_key: String,
    pub value: String,
}

#[derive(Deserialize)]
pub struct SaveAnswersRequest {
    pub answers: Vec<AnswerEntry>,
}

/// Validates every entry against the question catalog before saving any,
/// so a bad batch never half-applies.
pub async fn save(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(profile_id): Path<Uuid>,
    Json(request): Json<SaveAnswersRequest>,
) -> Result<Json<AnswersResponse>, ApiError> {
    let user_id = require_user(&headers)?;
    owned_profile(state.profiles.as_ref(), user_id, profile_id)?;

    for entry in &request.answers {
        if !catalog::is_valid_answer(&entry.question_key, &entry.value) {
            return Err(ApiError::BadRequest(format!(
                "invalid answer '{}' for question '{}'",
                entry.value, entry.question_key
            )));
        }
    }

    for entry in &request.answers {
        state
            .answers
            .save_answer(profile_id, &entry.question_key, &entry.value)?;
    }

    let answers = state.answers.get_answers(profile_id)?;
    Ok(Json(AnswersResponse { answers }))
}
