use super::ReviewError;
use crate::models::DocumentReview;

/// Parse and validate the completion response into a [`DocumentReview`].
///
/// Strict: all structural fields must be present with the right container
/// types. A partial parse is a failure, never a partial review — the
/// orchestrator turns any error here into the fallback.
pub fn parse_review_response(response: &str) -> Result<DocumentReview, ReviewError> {
    let payload = extract_json_payload(response);
    let review: DocumentReview = serde_json::from_str(payload)
        .map_err(|e| ReviewError::JsonParsing(e.to_string()))?;
    validate_review(&review)?;
    Ok(review)
}

/// Models sometimes wrap the JSON in markdown fences despite instructions;
/// accept the fenced payload too.
fn extract_json_payload(response: &str) -> &str {
    if let Some(start) = response.find("```json") {
        let rest = &response[start + 7..];
        if let Some(end) = rest.find("```") {
            return rest[..end].trim();
        }
    }
    response.trim()
}

fn validate_review(review: &DocumentReview) -> Result<(), ReviewError> {
    if review.summary.trim().is_empty() {
        return Err(ReviewError::Validation("empty summary".to_string()));
    }
    if review.confidence_notes.trim().is_empty() {
        return Err(ReviewError::Validation("empty confidence_notes".to_string()));
    }
    Ok(())
}
