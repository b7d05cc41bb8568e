use crate::models::AnswerSet;

/// Maximum document characters included in the prompt. Bounds cost and
/// keeps the request under model context limits.
pub const MAX_PROMPT_DOCUMENT_CHARS: usize = 10_000;

pub const REVIEW_SYSTEM_PROMPT: &str = "You are a helpful UK visa document reviewer. \
Provide structured, factual feedback. Never promise approval or give legal advice. \
Return only valid JSON.";

/// Build the closed review prompt for one document.
///
/// The extracted document text is embedded as data with no sanitization
/// beyond truncation, so a document crafted to carry prompt instructions
/// can reach the model. Known limitation.
pub fn build_review_prompt(
    document_type: &str,
    document_text: &str,
    answers: &AnswerSet,
) -> String {
    let (excerpt, truncated) = truncate_chars(document_text, MAX_PROMPT_DOCUMENT_CHARS);
    let truncation_marker = if truncated { " ... (truncated)" } else { "" };

    format!(
        r#"You are a UK visa document review assistant. Analyze the following document for a UK Student Visa application.

**Document Type:** {document_type}
**Applicant Information:**
- Nationality: {nationality}
- Study Level: {study_level}
- Funding Type: {funding_type}
- Has Sponsor (CAS): {has_sponsor}
- Previous UK Refusal: {previous_uk_refusal}

**Document Text:**
{excerpt}{truncation_marker}

**Task:**
Review this document for common UKVI (UK Visas and Immigration) issues. Check for:
1. Missing required information
2. Inconsistencies with applicant's stated situation
3. Formatting or validity concerns
4. Common mistakes that lead to visa refusals

Provide a structured review in JSON format with the following fields:
- summary: Brief overview of the document (2-3 sentences)
- issues_found: Array of specific problems identified (be specific, cite what you see)
- missing_information: Array of information that should be present but isn't
- consistency_warnings: Array of things that don't match the applicant's profile
- risk_level: "low" | "medium" | "high" (overall risk of rejection based on this document)
- confidence_notes: Brief explanation of your confidence level and limitations

**IMPORTANT:**
- Do NOT promise visa approval
- Do NOT provide legal advice
- Focus on factual observations
- Be helpful but cautious
- If you cannot extract meaningful text, state that clearly

Return ONLY valid JSON, no additional text."#,
        nationality = answers.get_or_unknown("nationality"),
        study_level = answers.get_or_unknown("study_level"),
        funding_type = answers.get_or_unknown("funding_type"),
        has_sponsor = answers.get_or_unknown("has_sponsor"),
        previous_uk_refusal = answers.get_or_unknown("previous_uk_refusal"),
    )
}

/// Truncate on a character boundary; returns whether anything was cut.
fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (&text[..byte_index], true),
        None => (text, false),
    }
}
