//! HTTP API for the visa application service.
//!
//! Routes are nested under `/api/` and identify the caller by the
//! `X-User-Id` header, a stand-in for real session authentication at the
//! edge. The router is composable — `visa_api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;

pub use router::visa_api_router;
pub use server::serve;

use std::sync::Arc;

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::documents::DocumentManager;
use crate::pipeline::ReviewPipeline;
use crate::store::{AnswerStore, DocumentStore, ProfileStore, ReviewStore};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Shared handler state. Everything is behind an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub answers: Arc<dyn AnswerStore>,
    pub documents: Arc<dyn DocumentStore>,
    pub reviews: Arc<dyn ReviewStore>,
    pub manager: Arc<DocumentManager>,
    pub pipeline: Arc<ReviewPipeline>,
}

/// Caller identity from the `X-User-Id` header.
pub fn require_user(headers: &HeaderMap) -> Result<Uuid, ApiError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or(ApiError::Unauthenticated)
}
