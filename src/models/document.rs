use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored metadata for one uploaded document. The binary itself lives in
/// the object store under `file_path`; re-uploading the same document type
/// replaces both the blob and this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub document_type: String,
    pub file_path: String,
    pub uploaded_at: NaiveDateTime,
}
