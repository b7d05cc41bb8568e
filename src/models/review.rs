use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured AI assessment of one uploaded document.
///
/// All fields are mandatory: an incomplete parse from the completion
/// service is treated as a failure, not a partial review. The rendering
/// layer relies on the literal lowercase `risk_level` values for styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReview {
    pub summary: String,
    pub issues_found: Vec<String>,
    pub missing_information: Vec<String>,
    pub consistency_warnings: Vec<String>,
    pub risk_level: RiskLevel,
    pub confidence_notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl DocumentReview {
    /// Fail-safe review returned when the AI call breaks in any way.
    ///
    /// Medium risk, never low: a broken review must not fabricate a false
    /// "all clear" signal, and must not block the applicant's workflow.
    pub fn fallback() -> Self {
        Self {
            summary: "Unable to complete AI review due to technical error.".to_string(),
            issues_found: vec![],
            missing_information: vec![],
            consistency_warnings: vec![],
            risk_level: RiskLevel::Medium,
            confidence_notes:
                "Review failed. Please manually verify this document or try again later."
                    .to_string(),
        }
    }
}

/// Append-only review history entry. Re-reviewing a document creates a new
/// record; retrieval returns only the most recent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub document_id: Uuid,
    pub review: DocumentReview,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Medium).unwrap(),
            "\"medium\""
        );
        let parsed: RiskLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, RiskLevel::High);
    }

    #[test]
    fn fallback_is_medium_risk_with_empty_lists() {
        let review = DocumentReview::fallback();
        assert_eq!(review.risk_level, RiskLevel::Medium);
        assert!(review.issues_found.is_empty());
        assert!(review.missing_information.is_empty());
        assert!(review.consistency_warnings.is_empty());
        assert!(review.summary.contains("technical error"));
        assert!(review.confidence_notes.contains("manually verify"));
    }
}
