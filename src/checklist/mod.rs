//! Rules-driven document checklist.
//!
//! `generate_checklist` is a pure, total function from the current answer
//! set to the personalized checklist: it must produce a result for any
//! input, including the empty answer set, and never fails.

pub mod engine;
pub mod rules;

pub use engine::generate_checklist;

use serde::Serialize;

use crate::catalog::DocumentSpec;

/// How strongly a document applies to this applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Required,
    Optional,
    /// Applicability depends on facts we cannot resolve from the answers
    /// (e.g. "other" nationality) — the applicant has to check.
    Conditional,
}

/// One catalog document placed on the checklist, with an optional note
/// specific to the applicant's situation.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRequirement {
    #[serde(flatten)]
    pub document: &'static DocumentSpec,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Derived view over the answer set — recomputed on demand, never stored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChecklistResult {
    pub required_documents: Vec<DocumentRequirement>,
    pub optional_documents: Vec<DocumentRequirement>,
    pub notes: Vec<String>,
}
