//! Collaborator contracts for persistence.
//!
//! Relational rows, uploaded binaries and subscription state all live in
//! external services; the core only depends on these traits. The
//! in-memory implementations back tests and the demo server.

pub mod memory;

pub use memory::{
    MemoryAnswerStore, MemoryDocumentStore, MemoryObjectStore, MemoryProfileStore,
    MemoryReviewStore, MemorySubscriptionStore,
};

use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Answer, DocumentRecord, DocumentReview, ProfileStatus, ReviewRecord, Subscription,
    VisaProfile,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("object not found at {0}")]
    ObjectNotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub trait ProfileStore: Send + Sync {
    fn create_profile(&self, user_id: Uuid, visa_type: &str) -> Result<VisaProfile, StoreError>;

    fn get_profile(&self, profile_id: Uuid) -> Result<Option<VisaProfile>, StoreError>;

    /// Profiles for one user, newest first.
    fn list_profiles(&self, user_id: Uuid) -> Result<Vec<VisaProfile>, StoreError>;

    fn update_status(
        &self,
        profile_id: Uuid,
        status: ProfileStatus,
    ) -> Result<Option<VisaProfile>, StoreError>;
}

pub trait AnswerStore: Send + Sync {
    fn get_answers(&self, profile_id: Uuid) -> Result<Vec<Answer>, StoreError>;

    /// Upsert keyed by `(profile_id, question_key)` — writing an existing
    /// key overwrites the value rather than duplicating the row.
    fn save_answer(
        &self,
        profile_id: Uuid,
        question_key: &str,
        value: &str,
    ) -> Result<Answer, StoreError>;
}

pub trait DocumentStore: Send + Sync {
    fn get_document(
        &self,
        profile_id: Uuid,
        document_type: &str,
    ) -> Result<Option<DocumentRecord>, StoreError>;

    fn list_documents(&self, profile_id: Uuid) -> Result<Vec<DocumentRecord>, StoreError>;

    fn create_document(
        &self,
        profile_id: Uuid,
        document_type: &str,
        file_path: &str,
    ) -> Result<DocumentRecord, StoreError>;

    fn delete_document(&self, document_id: Uuid) -> Result<(), StoreError>;
}

pub trait ReviewStore: Send + Sync {
    /// Append-only: every review creates a new record.
    fn create_review(
        &self,
        document_id: Uuid,
        review: DocumentReview,
    ) -> Result<ReviewRecord, StoreError>;

    /// Most recent review by creation time, if any.
    fn latest_review(&self, document_id: Uuid) -> Result<Option<ReviewRecord>, StoreError>;
}

pub trait ObjectStore: Send + Sync {
    fn download(&self, path: &str) -> Result<Vec<u8>, StoreError>;

    /// Store bytes and return the path they are reachable under.
    fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StoreError>;

    fn delete(&self, path: &str) -> Result<(), StoreError>;
}

pub trait SubscriptionStore: Send + Sync {
    fn get_subscription(&self, user_id: Uuid) -> Result<Option<Subscription>, StoreError>;

    fn upsert_subscription(&self, subscription: Subscription) -> Result<(), StoreError>;

    fn has_active_subscription(&self, user_id: Uuid) -> Result<bool, StoreError> {
        Ok(self
            .get_subscription(user_id)?
            .map(|s| s.is_active())
            .unwrap_or(false))
    }
}
