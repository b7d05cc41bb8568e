//! Upload lifecycle for applicant documents.
//!
//! One document per `(profile, document_type)` slot: re-uploading replaces
//! the previous file and its record rather than accumulating versions.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

use crate::extraction::{ExtractionError, MimeType};
use crate::models::DocumentRecord;
use crate::store::{DocumentStore, ObjectStore, ProfileStore, StoreError};

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]").unwrap());

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("profile does not belong to the requesting user")]
    Unauthorized,

    #[error("profile {0} not found")]
    ProfileNotFound(Uuid),

    #[error("no {document_type} document uploaded for profile {profile_id}")]
    DocumentNotFound {
        profile_id: Uuid,
        document_type: String,
    },

    #[error("file exceeds the {MAX_UPLOAD_BYTES} byte upload limit")]
    FileTooLarge,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct DocumentManager {
    profiles: Arc<dyn ProfileStore>,
    documents: Arc<dyn DocumentStore>,
    objects: Arc<dyn ObjectStore>,
}

impl DocumentManager {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        documents: Arc<dyn DocumentStore>,
        objects: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            profiles,
            documents,
            objects,
        }
    }

    /// Validate, store and record an uploaded document.
    ///
    /// Rejects files over [`MAX_UPLOAD_BYTES`] and declared content types
    /// other than PDF, JPEG and PNG before any byte is stored. If the slot
    /// already holds a document, the old blob and record are removed first.
    pub fn upload(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        document_type: &str,
        filename: &str,
        declared_mime: &str,
        bytes: &[u8],
    ) -> Result<DocumentRecord, DocumentError> {
        self.check_ownership(user_id, profile_id)?;

        MimeType::parse(declared_mime)?;
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(DocumentError::FileTooLarge);
        }

        if let Some(existing) = self.documents.get_document(profile_id, document_type)? {
            tracing::debug!(
                profile_id = %profile_id,
                document_type,
                "replacing previously uploaded document"
            );
            self.objects.delete(&existing.file_path)?;
            self.documents.delete_document(existing.id)?;
        }

        let path = storage_path(user_id, profile_id, document_type, filename);
        let stored_path = self.objects.upload(&path, bytes)?;
        let record = self
            .documents
            .create_document(profile_id, document_type, &stored_path)?;

        tracing::info!(
            profile_id = %profile_id,
            document_type,
            size = bytes.len(),
            "document uploaded"
        );
        Ok(record)
    }

    /// Remove a document slot: blob first, then the record.
    pub fn remove(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        document_type: &str,
    ) -> Result<(), DocumentError> {
        self.check_ownership(user_id, profile_id)?;

        let record = self
            .documents
            .get_document(profile_id, document_type)?
            .ok_or_else(|| DocumentError::DocumentNotFound {
                profile_id,
                document_type: document_type.to_string(),
            })?;

        self.objects.delete(&record.file_path)?;
        self.documents.delete_document(record.id)?;
        Ok(())
    }

    fn check_ownership(&self, user_id: Uuid, profile_id: Uuid) -> Result<(), DocumentError> {
        let profile = self
            .profiles
            .get_profile(profile_id)?
            .ok_or(DocumentError::ProfileNotFound(profile_id))?;
        if profile.user_id != user_id {
            return Err(DocumentError::Unauthorized);
        }
        Ok(())
    }
}

/// Storage path scoped by owner and profile, so object-level access rules
/// can match on prefix.
fn storage_path(user_id: Uuid, profile_id: Uuid, document_type: &str, filename: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        user_id,
        profile_id,
        document_type,
        sanitize_filename(filename)
    )
}

fn sanitize_filename(filename: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(filename, "_").to_string()
}
