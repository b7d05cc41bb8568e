//! UK Student visa checklist rules.
//!
//! Two rule kinds, each a small pure function over the answer set:
//! document rules place at most one catalog document on the checklist,
//! advisory rules contribute profile-wide notes. The engine composes both
//! lists in their declared order, which fixes checklist and note ordering.

use super::{DocumentRequirement, Priority};
use crate::catalog::uk_student;
use crate::models::AnswerSet;

/// Nationalities for which a TB test certificate is mandatory.
pub const TB_TEST_NATIONALITIES: &[&str] = &["india", "pakistan", "bangladesh", "nigeria", "china"];

pub type DocumentRule = fn(&AnswerSet) -> Option<DocumentRequirement>;
pub type AdvisoryRule = fn(&AnswerSet) -> Option<String>;

/// Document rules in checklist order.
pub const UK_STUDENT_DOCUMENT_RULES: &[DocumentRule] = &[
    passport,
    cas_letter,
    financial_evidence,
    sponsor_letter,
    tb_test,
    refusal_explanation,
];

/// Advisory rules in note order.
pub const UK_STUDENT_ADVISORY_RULES: &[AdvisoryRule] = &[
    tb_test_advisory,
    refusal_advisory,
    university_acceptance_advisory,
];

fn place(key: &str, priority: Priority, note: Option<&str>) -> Option<DocumentRequirement> {
    let document = uk_student::document(key)?;
    Some(DocumentRequirement {
        document,
        priority,
        note: note.map(str::to_string),
    })
}

fn passport(_answers: &AnswerSet) -> Option<DocumentRequirement> {
    place("passport", Priority::Required, None)
}

fn cas_letter(_answers: &AnswerSet) -> Option<DocumentRequirement> {
    place("CAS_letter", Priority::Required, None)
}

/// Financial evidence is always required; the note depends on the funding
/// route. An unrecognized or absent funding type keeps the requirement
/// with no note — a safe default, not an error.
fn financial_evidence(answers: &AnswerSet) -> Option<DocumentRequirement> {
    let note = match answers.get("funding_type") {
        Some("self_funded") => Some(
            "Show £1,334 per month (up to 9 months) for London, or £1,023 for outside London, \
             plus full tuition for first year.",
        ),
        Some("scholarship") => {
            Some("Provide scholarship award letter and proof of any remaining funds needed.")
        }
        Some("student_loan") => {
            Some("Provide student loan approval letter showing amount and disbursement schedule.")
        }
        Some("sponsor") => {
            Some("Submit sponsor's bank statements (not yours) showing sufficient funds.")
        }
        _ => None,
    };
    place("bank_statement", Priority::Required, note)
}

/// Either/or: required when a sponsor funds the studies, otherwise demoted
/// to optional. Never both.
fn sponsor_letter(answers: &AnswerSet) -> Option<DocumentRequirement> {
    if answers.is("funding_type", "sponsor") {
        place(
            "sponsor_letter",
            Priority::Required,
            Some("Must include relationship proof (birth certificate, etc.) and sponsor's consent."),
        )
    } else {
        place(
            "sponsor_letter",
            Priority::Optional,
            Some("Only needed if someone else is funding your studies."),
        )
    }
}

/// TB test: required for listed nationalities, conditional for "other",
/// absent from the checklist for everyone else (including an unanswered
/// nationality).
fn tb_test(answers: &AnswerSet) -> Option<DocumentRequirement> {
    match answers.get("nationality") {
        Some(n) if TB_TEST_NATIONALITIES.contains(&n) => place(
            "TB_test",
            Priority::Required,
            Some("Required for nationals of TB-prevalent countries. Get tested at an approved clinic."),
        ),
        Some("other") => place(
            "TB_test",
            Priority::Conditional,
            Some("Check gov.uk to see if TB test is required for your country."),
        ),
        _ => None,
    }
}

fn refusal_explanation(answers: &AnswerSet) -> Option<DocumentRequirement> {
    if answers.is("previous_uk_refusal", "yes") {
        place(
            "previous_refusal_explanation",
            Priority::Required,
            Some("You MUST explain previous refusal and show how circumstances have changed."),
        )
    } else {
        place(
            "previous_refusal_explanation",
            Priority::Optional,
            Some("Not applicable - no previous refusals."),
        )
    }
}

/// Only "other" suppresses the advisory: an unanswered nationality still
/// gets the "not required" note, mirroring the document rule's safe
/// default of not placing the TB test on the checklist.
fn tb_test_advisory(answers: &AnswerSet) -> Option<String> {
    match answers.get("nationality") {
        Some(n) if TB_TEST_NATIONALITIES.contains(&n) => Some(
            "TB test is mandatory for your nationality. Book at an approved clinic listed on gov.uk."
                .to_string(),
        ),
        Some("other") => None,
        _ => Some("TB test is not required for your nationality.".to_string()),
    }
}

fn refusal_advisory(answers: &AnswerSet) -> Option<String> {
    if answers.is("previous_uk_refusal", "yes") {
        Some(
            "Previous visa refusal detected. Be transparent and provide detailed explanation \
             with supporting evidence."
                .to_string(),
        )
    } else {
        None
    }
}

fn university_acceptance_advisory(answers: &AnswerSet) -> Option<String> {
    match answers.get("has_sponsor") {
        Some("no") => Some(
            "You need to apply to and be accepted by a university before applying for your visa."
                .to_string(),
        ),
        Some("pending") => {
            Some("Wait for your CAS to arrive before submitting your visa application.".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn financial_evidence_note_switches_on_funding_type() {
        for (funding, fragment) in [
            ("self_funded", "£1,334"),
            ("scholarship", "scholarship award letter"),
            ("student_loan", "student loan approval letter"),
            ("sponsor", "sponsor's bank statements"),
        ] {
            let answers: AnswerSet = [("funding_type", funding)].into_iter().collect();
            let requirement = financial_evidence(&answers).unwrap();
            assert_eq!(requirement.priority, Priority::Required);
            let note = requirement.note.unwrap();
            assert!(note.contains(fragment), "{funding}: {note}");
        }
    }

    #[test]
    fn financial_evidence_unrecognized_funding_is_required_without_note() {
        let answers: AnswerSet = [("funding_type", "inheritance")].into_iter().collect();
        let requirement = financial_evidence(&answers).unwrap();
        assert_eq!(requirement.priority, Priority::Required);
        assert!(requirement.note.is_none());

        let requirement = financial_evidence(&AnswerSet::new()).unwrap();
        assert_eq!(requirement.priority, Priority::Required);
        assert!(requirement.note.is_none());
    }

    #[test]
    fn sponsor_letter_is_either_or() {
        let sponsored: AnswerSet = [("funding_type", "sponsor")].into_iter().collect();
        let requirement = sponsor_letter(&sponsored).unwrap();
        assert_eq!(requirement.priority, Priority::Required);
        assert!(!requirement.note.as_deref().unwrap_or("").is_empty());

        let requirement = sponsor_letter(&AnswerSet::new()).unwrap();
        assert_eq!(requirement.priority, Priority::Optional);
    }

    #[test]
    fn tb_test_required_for_listed_nationalities() {
        for nationality in TB_TEST_NATIONALITIES {
            let answers: AnswerSet = [("nationality", *nationality)].into_iter().collect();
            let requirement = tb_test(&answers).unwrap();
            assert_eq!(requirement.priority, Priority::Required);
            assert!(tb_test_advisory(&answers).unwrap().contains("mandatory"));
        }
    }

    #[test]
    fn tb_test_conditional_for_other_nationality() {
        let answers: AnswerSet = [("nationality", "other")].into_iter().collect();
        let requirement = tb_test(&answers).unwrap();
        assert_eq!(requirement.priority, Priority::Conditional);
        assert!(tb_test_advisory(&answers).is_none());
    }

    #[test]
    fn tb_test_absent_for_unlisted_nationality_with_advisory() {
        let answers: AnswerSet = [("nationality", "france")].into_iter().collect();
        assert!(tb_test(&answers).is_none());
        assert!(tb_test_advisory(&answers).unwrap().contains("not required"));
    }

    #[test]
    fn unknown_nationality_gets_no_tb_entry_but_keeps_the_advisory() {
        let empty = AnswerSet::new();
        assert!(tb_test(&empty).is_none());
        assert!(tb_test_advisory(&empty).unwrap().contains("not required"));
    }

    #[test]
    fn refusal_explanation_branches() {
        let refused: AnswerSet = [("previous_uk_refusal", "yes")].into_iter().collect();
        assert_eq!(refusal_explanation(&refused).unwrap().priority, Priority::Required);
        assert!(refusal_advisory(&refused).unwrap().contains("transparent"));

        let clean: AnswerSet = [("previous_uk_refusal", "no")].into_iter().collect();
        assert_eq!(refusal_explanation(&clean).unwrap().priority, Priority::Optional);
        assert!(refusal_advisory(&clean).is_none());

        assert_eq!(
            refusal_explanation(&AnswerSet::new()).unwrap().priority,
            Priority::Optional
        );
    }

    #[test]
    fn acceptance_advisory_branches() {
        let no: AnswerSet = [("has_sponsor", "no")].into_iter().collect();
        assert!(university_acceptance_advisory(&no).unwrap().contains("accepted by a university"));

        let pending: AnswerSet = [("has_sponsor", "pending")].into_iter().collect();
        assert!(university_acceptance_advisory(&pending).unwrap().contains("Wait for your CAS"));

        let yes: AnswerSet = [("has_sponsor", "yes")].into_iter().collect();
        assert!(university_acceptance_advisory(&yes).is_none());
        assert!(university_acceptance_advisory(&AnswerSet::new()).is_none());
    }
}
