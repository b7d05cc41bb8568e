//! Document upload endpoints.
//!
//! - `GET /api/profiles/:profile_id/documents` — uploaded documents
//! - `POST /api/profiles/:profile_id/documents/:document_type` — upload
//!   (raw body; declared type from `Content-Type`, filename from query)
//! - `DELETE /api/profiles/:profile_id/documents/:document_type` — remove

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{require_user, AppState};
use crate::catalog::uk_student;
use crate::models::DocumentRecord;
use crate::pipeline::owned_profile;

#[derive(Serialize)]
pub struct DocumentsResponse {
    pub documents: Vec<DocumentRecord>,
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<DocumentsResponse>, ApiError> {
    let user_id = require_user(&headers)?;
    owned_profile(state.profiles.as_ref(), user_id, profile_id)?;
    let documents = state.documents.list_documents(profile_id)?;
    Ok(Json(DocumentsResponse { documents }))
}

#[derive(Deserialize)]
pub struct UploadQuery {
    pub filename: Option<String>,
}

pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((profile_id, document_type)): Path<(Uuid, String)>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<Json<DocumentRecord>, ApiError> {
    let user_id = require_user(&headers)?;

    if uk_student::document(&document_type).is_none() {
        return Err(ApiError::BadRequest(format!(
            "unknown document type: {document_type}"
        )));
    }

    let declared_mime = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest("missing Content-Type header".to_string()))?
        .to_string();
    let filename = query.filename.as_deref().unwrap_or("document");

    let record = state.manager.upload(
        user_id,
        profile_id,
        &document_type,
        filename,
        &declared_mime,
        &body,
    )?;
    Ok(Json(record))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((profile_id, document_type)): Path<(Uuid, String)>,
) -> Result<StatusCode, ApiError> {
    let user_id = require_user(&headers)?;
    state.manager.remove(user_id, profile_id, &document_type)?;
    Ok(StatusCode::NO_CONTENT)
}
