//! `GET /api/questions` — the onboarding question catalog.

use axum::Json;
use serde::Serialize;

use crate::catalog::uk_student::UK_STUDENT_QUESTIONS;
use crate::catalog::Question;

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [Question],
}

/// The catalog is static, so no authentication is required.
pub async fn list() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: UK_STUDENT_QUESTIONS,
    })
}
