//! `GET /api/profiles/:profile_id/checklist` — the personalized
//! document checklist derived from the profile's current answers.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{require_user, AppState};
use crate::checklist::{generate_checklist, ChecklistResult};
use crate::models::AnswerSet;
use crate::pipeline::owned_profile;

/// Recomputed from answers on every request — the checklist is derived
/// state and is never stored.
pub async fn show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<ChecklistResult>, ApiError> {
    let user_id = require_user(&headers)?;
    owned_profile(state.profiles.as_ref(), user_id, profile_id)?;

    let answers = AnswerSet::from_answers(&state.answers.get_answers(profile_id)?);
    Ok(Json(generate_checklist(&answers)))
}
