//! Visa profile endpoints.
//!
//! - `POST /api/profiles` — create a profile for the caller
//! - `GET /api/profiles` — list the caller's profiles, newest first

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::{require_user, AppState};
use crate::models::VisaProfile;

const DEFAULT_VISA_TYPE: &str = "uk_student";

#[derive(Deserialize, Default)]
pub struct CreateProfileRequest {
    pub visa_type: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<CreateProfileRequest>>,
) -> Result<Json<VisaProfile>, ApiError> {
    let user_id = require_user(&headers)?;
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let visa_type = request.visa_type.as_deref().unwrap_or(DEFAULT_VISA_TYPE);

    if visa_type != DEFAULT_VISA_TYPE {
        return Err(ApiError::BadRequest(format!(
            "unsupported visa type: {visa_type}"
        )));
    }

    let profile = state.profiles.create_profile(user_id, visa_type)?;
    tracing::info!(profile_id = %profile.id, "visa profile created");
    Ok(Json(profile))
}

#[derive(Serialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<VisaProfile>,
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProfilesResponse>, ApiError> {
    let user_id = require_user(&headers)?;
    let profiles = state.profiles.list_profiles(user_id)?;
    Ok(Json(ProfilesResponse { profiles }))
}
