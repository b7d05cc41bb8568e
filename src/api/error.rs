//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::documents::DocumentError;
use crate::extraction::ExtractionError;
use crate::pipeline::PipelineError;
use crate::store::StoreError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Forbidden")]
    Forbidden,
    #[error("Active subscription required")]
    SubscriptionRequired,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("File too large")]
    FileTooLarge,
    #[error("Unprocessable document: {0}")]
    Unprocessable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "AUTH_REQUIRED",
                "Authentication required".to_string(),
            ),
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "You do not have access to this resource".to_string(),
            ),
            ApiError::SubscriptionRequired => (
                StatusCode::PAYMENT_REQUIRED,
                "SUBSCRIPTION_REQUIRED",
                "An active subscription is required for AI document review".to_string(),
            ),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::UnsupportedFormat(detail) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                format!("Unsupported document format: {detail}"),
            ),
            ApiError::FileTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "FILE_TOO_LARGE",
                "Uploaded file exceeds the 10 MB limit".to_string(),
            ),
            ApiError::Unprocessable(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE",
                detail.clone(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ObjectNotFound(path) => ApiError::NotFound(format!("file at {path}")),
            StoreError::LockPoisoned | StoreError::Backend(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat(mime) => ApiError::UnsupportedFormat(mime),
            ExtractionError::PdfParsing(_) | ExtractionError::EmptyText => {
                ApiError::Unprocessable(err.to_string())
            }
        }
    }
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Unauthorized => ApiError::Forbidden,
            DocumentError::ProfileNotFound(id) => ApiError::NotFound(format!("profile {id}")),
            DocumentError::DocumentNotFound { document_type, .. } => {
                ApiError::NotFound(format!("{document_type} document"))
            }
            DocumentError::FileTooLarge => ApiError::FileTooLarge,
            DocumentError::Extraction(e) => e.into(),
            DocumentError::Store(e) => e.into(),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Unauthorized => ApiError::Forbidden,
            PipelineError::NotFound(what) => ApiError::NotFound(what),
            PipelineError::SubscriptionRequired => ApiError::SubscriptionRequired,
            PipelineError::InsufficientText => {
                ApiError::Unprocessable("extracted text is too short to review".to_string())
            }
            PipelineError::Extraction(e) => e.into(),
            PipelineError::Store(e) => e.into(),
        }
    }
}
