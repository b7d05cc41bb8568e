use std::sync::Arc;

use super::openai::CompletionClient;
use super::parser::parse_review_response;
use super::prompt::{build_review_prompt, REVIEW_SYSTEM_PROMPT};
use super::ReviewError;
use crate::models::{AnswerSet, DocumentReview};

/// Fail-safe AI document reviewer.
///
/// `review` always returns a well-formed [`DocumentReview`]. Transport
/// failures, malformed model output and schema violations are all handled
/// the same way: log and fall back. A broken AI call must not block the
/// applicant's workflow, and the fallback reports medium risk so an outage
/// never reads as "low risk".
pub struct DocumentReviewer {
    client: Arc<dyn CompletionClient>,
}

impl DocumentReviewer {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub fn review(
        &self,
        document_type: &str,
        document_text: &str,
        answers: &AnswerSet,
    ) -> DocumentReview {
        match self.try_review(document_type, document_text, answers) {
            Ok(review) => review,
            Err(error) => {
                tracing::warn!(%error, document_type, "AI review failed, returning fallback");
                DocumentReview::fallback()
            }
        }
    }

    fn try_review(
        &self,
        document_type: &str,
        document_text: &str,
        answers: &AnswerSet,
    ) -> Result<DocumentReview, ReviewError> {
        let prompt = build_review_prompt(document_type, document_text, answers);
        let response = self.client.complete(REVIEW_SYSTEM_PROMPT, &prompt)?;
        parse_review_response(&response)
    }
}
