//! Static per-visa-type registries: onboarding questions and document
//! definitions. Catalogs are fixed at build time; supporting another visa
//! type means adding a catalog pair and a matching rule list in
//! `checklist::rules`.

pub mod uk_student;

use serde::Serialize;

/// Input control used to render a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Dropdown, one value.
    Select,
    /// Radio group, one value.
    Radio,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Question {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [QuestionOption],
}

/// Catalog entry for one checklist document. `base_required` is the
/// default; rules may promote or demote per applicant.
#[derive(Debug, Serialize)]
pub struct DocumentSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub common_mistakes: &'static [&'static str],
    pub base_required: bool,
}

/// Entry-time answer validation: a value is acceptable only if the
/// question exists and lists it as an option.
pub fn is_valid_answer(question_key: &str, value: &str) -> bool {
    uk_student::question(question_key)
        .map(|q| q.options.iter().any(|o| o.value == value))
        .unwrap_or(false)
}
