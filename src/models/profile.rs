use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One visa application, owned by a single user. Answers, documents and
/// reviews are all scoped to a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisaProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub visa_type: String,
    pub status: ProfileStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Draft,
    Submitted,
    Decided,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProfileStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&ProfileStatus::Submitted).unwrap(),
            "\"submitted\""
        );
    }
}
