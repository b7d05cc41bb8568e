use super::rules::{UK_STUDENT_ADVISORY_RULES, UK_STUDENT_DOCUMENT_RULES};
use super::{ChecklistResult, Priority};
use crate::models::AnswerSet;

/// Derive the personalized document checklist from the current answers.
///
/// Pure and total: any answer set produces a checklist. A document rule
/// decides its own placement through the requirement's priority — required
/// goes to `required_documents`, optional and conditional both render in
/// `optional_documents` — so no document can appear in both lists.
pub fn generate_checklist(answers: &AnswerSet) -> ChecklistResult {
    let mut result = ChecklistResult::default();

    for rule in UK_STUDENT_DOCUMENT_RULES {
        if let Some(requirement) = rule(answers) {
            match requirement.priority {
                Priority::Required => result.required_documents.push(requirement),
                Priority::Optional | Priority::Conditional => {
                    result.optional_documents.push(requirement)
                }
            }
        }
    }

    for rule in UK_STUDENT_ADVISORY_RULES {
        if let Some(note) = rule(answers) {
            result.notes.push(note);
        }
    }

    result
}
