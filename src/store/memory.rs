//! In-memory store implementations, used by tests and the demo server.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use super::{
    AnswerStore, DocumentStore, ObjectStore, ProfileStore, ReviewStore, StoreError,
    SubscriptionStore,
};
use crate::models::{
    Answer, DocumentRecord, DocumentReview, ProfileStatus, ReviewRecord, Subscription,
    VisaProfile,
};

fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, VisaProfile>>,
}

impl ProfileStore for MemoryProfileStore {
    fn create_profile(&self, user_id: Uuid, visa_type: &str) -> Result<VisaProfile, StoreError> {
        let profile = VisaProfile {
            id: Uuid::new_v4(),
            user_id,
            visa_type: visa_type.to_string(),
            status: ProfileStatus::Draft,
            created_at: now(),
            updated_at: now(),
        };
        let mut guard = self.profiles.write().map_err(|_| StoreError::LockPoisoned)?;
        guard.insert(profile.id, profile.clone());
        Ok(profile)
    }

    fn get_profile(&self, profile_id: Uuid) -> Result<Option<VisaProfile>, StoreError> {
        let guard = self.profiles.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.get(&profile_id).cloned())
    }

    fn list_profiles(&self, user_id: Uuid) -> Result<Vec<VisaProfile>, StoreError> {
        let guard = self.profiles.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut profiles: Vec<VisaProfile> = guard
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }

    fn update_status(
        &self,
        profile_id: Uuid,
        status: ProfileStatus,
    ) -> Result<Option<VisaProfile>, StoreError> {
        let mut guard = self.profiles.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.get_mut(&profile_id).map(|profile| {
            profile.status = status;
            profile.updated_at = now();
            profile.clone()
        }))
    }
}

#[derive(Default)]
pub struct MemoryAnswerStore {
    answers: RwLock<Vec<Answer>>,
}

impl AnswerStore for MemoryAnswerStore {
    fn get_answers(&self, profile_id: Uuid) -> Result<Vec<Answer>, StoreError> {
        let guard = self.answers.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard
            .iter()
            .filter(|a| a.profile_id == profile_id)
            .cloned()
            .collect())
    }

    fn save_answer(
        &self,
        profile_id: Uuid,
        question_key: &str,
        value: &str,
    ) -> Result<Answer, StoreError> {
        let mut guard = self.answers.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(existing) = guard
            .iter_mut()
            .find(|a| a.profile_id == profile_id && a.question_key == question_key)
        {
            existing.value = value.to_string();
            return Ok(existing.clone());
        }
        let answer = Answer {
            id: Uuid::new_v4(),
            profile_id,
            question_key: question_key.to_string(),
            value: value.to_string(),
            created_at: now(),
        };
        guard.push(answer.clone());
        Ok(answer)
    }
}

#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<Vec<DocumentRecord>>,
}

impl DocumentStore for MemoryDocumentStore {
    fn get_document(
        &self,
        profile_id: Uuid,
        document_type: &str,
    ) -> Result<Option<DocumentRecord>, StoreError> {
        let guard = self.documents.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard
            .iter()
            .find(|d| d.profile_id == profile_id && d.document_type == document_type)
            .cloned())
    }

    fn list_documents(&self, profile_id: Uuid) -> Result<Vec<DocumentRecord>, StoreError> {
        let guard = self.documents.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut documents: Vec<DocumentRecord> = guard
            .iter()
            .filter(|d| d.profile_id == profile_id)
            .cloned()
            .collect();
        documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(documents)
    }

    fn create_document(
        &self,
        profile_id: Uuid,
        document_type: &str,
        file_path: &str,
    ) -> Result<DocumentRecord, StoreError> {
        let record = DocumentRecord {
            id: Uuid::new_v4(),
            profile_id,
            document_type: document_type.to_string(),
            file_path: file_path.to_string(),
            uploaded_at: now(),
        };
        let mut guard = self.documents.write().map_err(|_| StoreError::LockPoisoned)?;
        guard.push(record.clone());
        Ok(record)
    }

    fn delete_document(&self, document_id: Uuid) -> Result<(), StoreError> {
        let mut guard = self.documents.write().map_err(|_| StoreError::LockPoisoned)?;
        guard.retain(|d| d.id != document_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryReviewStore {
    reviews: RwLock<Vec<ReviewRecord>>,
}

impl ReviewStore for MemoryReviewStore {
    fn create_review(
        &self,
        document_id: Uuid,
        review: DocumentReview,
    ) -> Result<ReviewRecord, StoreError> {
        let record = ReviewRecord {
            id: Uuid::new_v4(),
            document_id,
            review,
            created_at: now(),
        };
        let mut guard = self.reviews.write().map_err(|_| StoreError::LockPoisoned)?;
        guard.push(record.clone());
        Ok(record)
    }

    fn latest_review(&self, document_id: Uuid) -> Result<Option<ReviewRecord>, StoreError> {
        let guard = self.reviews.read().map_err(|_| StoreError::LockPoisoned)?;
        // Insertion order is creation order; ties on the timestamp resolve
        // to the most recently appended record.
        Ok(guard
            .iter()
            .rev()
            .find(|r| r.document_id == document_id)
            .cloned())
    }
}

#[derive(Default)]
pub struct MemoryObjectStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl ObjectStore for MemoryObjectStore {
    fn download(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        let guard = self.objects.read().map_err(|_| StoreError::LockPoisoned)?;
        guard
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::ObjectNotFound(path.to_string()))
    }

    fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let mut guard = self.objects.write().map_err(|_| StoreError::LockPoisoned)?;
        guard.insert(path.to_string(), bytes.to_vec());
        Ok(path.to_string())
    }

    fn delete(&self, path: &str) -> Result<(), StoreError> {
        let mut guard = self.objects.write().map_err(|_| StoreError::LockPoisoned)?;
        guard.remove(path);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySubscriptionStore {
    subscriptions: RwLock<HashMap<Uuid, Subscription>>,
}

impl SubscriptionStore for MemorySubscriptionStore {
    fn get_subscription(&self, user_id: Uuid) -> Result<Option<Subscription>, StoreError> {
        let guard = self
            .subscriptions
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.get(&user_id).cloned())
    }

    fn upsert_subscription(&self, subscription: Subscription) -> Result<(), StoreError> {
        let mut guard = self
            .subscriptions
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        guard.insert(subscription.user_id, subscription);
        Ok(())
    }
}
