//! AI review endpoints.
//!
//! - `POST /api/profiles/:profile_id/documents/:document_type/review` —
//!   run the review pipeline for one document slot
//! - `GET .../review` — the most recent stored review

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{require_user, AppState};
use crate::models::ReviewRecord;
use crate::pipeline::owned_profile;

/// The pipeline's completion client is blocking, so the run is moved off
/// the async worker threads.
pub async fn run(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((profile_id, document_type)): Path<(Uuid, String)>,
) -> Result<Json<ReviewRecord>, ApiError> {
    let user_id = require_user(&headers)?;

    let pipeline = state.pipeline.clone();
    let record = tokio::task::spawn_blocking(move || {
        pipeline.run(user_id, profile_id, &document_type)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("review task failed: {e}")))??;

    Ok(Json(record))
}

pub async fn latest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((profile_id, document_type)): Path<(Uuid, String)>,
) -> Result<Json<ReviewRecord>, ApiError> {
    let user_id = require_user(&headers)?;
    owned_profile(state.profiles.as_ref(), user_id, profile_id)?;

    let document = state
        .documents
        .get_document(profile_id, &document_type)?
        .ok_or_else(|| ApiError::NotFound(format!("{document_type} document")))?;

    let record = state
        .reviews
        .latest_review(document.id)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("no review for {document_type} document"))
        })?;
    Ok(Json(record))
}
