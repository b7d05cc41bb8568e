//! End-to-end review pipeline for a single uploaded document.
//!
//! Coordinates authorization, subscription gating, blob download, text
//! extraction and the AI review, then persists the result. Only the steps
//! before the AI call can fail; the reviewer itself falls back internally,
//! so a successful extraction always produces a stored review.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::extraction::{extract_document_text, ExtractionError, MimeType};
use crate::models::{AnswerSet, ReviewRecord, VisaProfile};
use crate::review::DocumentReviewer;
use crate::store::{
    AnswerStore, DocumentStore, ObjectStore, ProfileStore, ReviewStore, StoreError,
    SubscriptionStore,
};

/// Extracted text shorter than this is useless as review input — it is
/// almost always a scan artifact or a blank page.
pub const MIN_TEXT_CHARS: usize = 10;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("profile does not belong to the requesting user")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(String),

    #[error("an active subscription is required for AI document review")]
    SubscriptionRequired,

    #[error("extracted text is too short to review")]
    InsufficientText,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fetch a profile and verify the requesting user owns it.
pub fn owned_profile(
    profiles: &dyn ProfileStore,
    user_id: Uuid,
    profile_id: Uuid,
) -> Result<VisaProfile, PipelineError> {
    let profile = profiles
        .get_profile(profile_id)?
        .ok_or_else(|| PipelineError::NotFound(format!("profile {profile_id}")))?;
    if profile.user_id != user_id {
        return Err(PipelineError::Unauthorized);
    }
    Ok(profile)
}

pub struct ReviewPipeline {
    profiles: Arc<dyn ProfileStore>,
    answers: Arc<dyn AnswerStore>,
    documents: Arc<dyn DocumentStore>,
    reviews: Arc<dyn ReviewStore>,
    objects: Arc<dyn ObjectStore>,
    subscriptions: Arc<dyn SubscriptionStore>,
    reviewer: DocumentReviewer,
}

impl ReviewPipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        answers: Arc<dyn AnswerStore>,
        documents: Arc<dyn DocumentStore>,
        reviews: Arc<dyn ReviewStore>,
        objects: Arc<dyn ObjectStore>,
        subscriptions: Arc<dyn SubscriptionStore>,
        reviewer: DocumentReviewer,
    ) -> Self {
        Self {
            profiles,
            answers,
            documents,
            reviews,
            objects,
            subscriptions,
            reviewer,
        }
    }

    /// Review the uploaded document in one profile slot and persist the
    /// resulting record.
    pub fn run(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        document_type: &str,
    ) -> Result<ReviewRecord, PipelineError> {
        owned_profile(self.profiles.as_ref(), user_id, profile_id)?;

        if !self.subscriptions.has_active_subscription(user_id)? {
            return Err(PipelineError::SubscriptionRequired);
        }

        let document = self
            .documents
            .get_document(profile_id, document_type)?
            .ok_or_else(|| {
                PipelineError::NotFound(format!("{document_type} document"))
            })?;

        let bytes = self.objects.download(&document.file_path)?;
        let mime = MimeType::from_file_path(&document.file_path);
        let text = extract_document_text(&bytes, mime)?;
        if text.chars().count() < MIN_TEXT_CHARS {
            return Err(PipelineError::InsufficientText);
        }

        let answers = AnswerSet::from_answers(&self.answers.get_answers(profile_id)?);

        tracing::info!(
            profile_id = %profile_id,
            document_type,
            text_chars = text.chars().count(),
            "running AI document review"
        );
        let review = self.reviewer.review(document_type, &text, &answers);

        Ok(self.reviews.create_review(document.id, review)?)
    }
}
