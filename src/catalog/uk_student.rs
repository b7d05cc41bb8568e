//! UK Student visa catalogs: onboarding questions and checklist documents.

use super::{DocumentSpec, Question, QuestionKind, QuestionOption};

pub const UK_STUDENT_QUESTIONS: &[Question] = &[
    Question {
        key: "nationality",
        label: "What is your nationality?",
        kind: QuestionKind::Select,
        options: &[
            QuestionOption { value: "india", label: "India" },
            QuestionOption { value: "china", label: "China" },
            QuestionOption { value: "nigeria", label: "Nigeria" },
            QuestionOption { value: "pakistan", label: "Pakistan" },
            QuestionOption { value: "bangladesh", label: "Bangladesh" },
            QuestionOption { value: "other", label: "Other" },
        ],
    },
    Question {
        key: "study_level",
        label: "What level of study are you applying for?",
        kind: QuestionKind::Radio,
        options: &[
            QuestionOption { value: "undergraduate", label: "Undergraduate (Bachelor's degree)" },
            QuestionOption { value: "postgraduate_taught", label: "Postgraduate Taught (Master's)" },
            QuestionOption { value: "postgraduate_research", label: "Postgraduate Research (PhD)" },
            QuestionOption { value: "foundation", label: "Foundation or Pre-sessional course" },
        ],
    },
    Question {
        key: "funding_type",
        label: "How will you fund your studies?",
        kind: QuestionKind::Radio,
        options: &[
            QuestionOption { value: "self_funded", label: "Self-funded (personal or family funds)" },
            QuestionOption { value: "scholarship", label: "Scholarship or grant" },
            QuestionOption { value: "student_loan", label: "Student loan" },
            QuestionOption { value: "sponsor", label: "Financial sponsor" },
        ],
    },
    Question {
        key: "has_sponsor",
        label: "Do you have a confirmed sponsor (university acceptance)?",
        kind: QuestionKind::Radio,
        options: &[
            QuestionOption { value: "yes", label: "Yes, I have a CAS (Confirmation of Acceptance for Studies)" },
            QuestionOption { value: "pending", label: "Pending - waiting for CAS" },
            QuestionOption { value: "no", label: "No, not yet applied" },
        ],
    },
    Question {
        key: "previous_uk_refusal",
        label: "Have you previously been refused a UK visa?",
        kind: QuestionKind::Radio,
        options: &[
            QuestionOption { value: "no", label: "No" },
            QuestionOption { value: "yes", label: "Yes" },
        ],
    },
];

pub const UK_STUDENT_DOCUMENTS: &[DocumentSpec] = &[
    DocumentSpec {
        key: "passport",
        title: "Valid Passport",
        description: "Your passport must be valid for the entire duration of your stay in the UK.",
        common_mistakes: &[
            "Passport expires before course end date",
            "Insufficient blank pages (need at least 2)",
            "Damaged passport pages",
        ],
        base_required: true,
    },
    DocumentSpec {
        key: "CAS_letter",
        title: "CAS (Confirmation of Acceptance for Studies)",
        description: "Official confirmation from your university that you have been offered a place.",
        common_mistakes: &[
            "CAS number not matching application",
            "CAS expired (valid for 6 months)",
            "Institution not on approved sponsor list",
        ],
        base_required: true,
    },
    DocumentSpec {
        key: "bank_statement",
        title: "Financial Evidence",
        description: "Proof that you have sufficient funds to cover tuition and living expenses.",
        common_mistakes: &[
            "Bank statements older than 31 days",
            "Insufficient funds shown",
            "Not in your name or parents' name",
            "Missing required 28-day history",
        ],
        base_required: true,
    },
    DocumentSpec {
        key: "TB_test",
        title: "TB Test Certificate",
        description: "Tuberculosis test certificate from an approved clinic (required for certain countries).",
        common_mistakes: &[
            "Test taken at non-approved clinic",
            "Certificate expired (valid for 6 months)",
            "Not required but submitted anyway",
        ],
        base_required: false,
    },
    DocumentSpec {
        key: "sponsor_letter",
        title: "Financial Sponsor Letter",
        description: "Letter from sponsor confirming they will cover your expenses, with their financial evidence.",
        common_mistakes: &[
            "Missing sponsor relationship proof",
            "Sponsor's bank statements not included",
            "Letter not properly formatted",
        ],
        base_required: false,
    },
    DocumentSpec {
        key: "previous_refusal_explanation",
        title: "Previous Visa Refusal Explanation",
        description: "Detailed explanation of previous UK visa refusal and how you've addressed the issues.",
        common_mistakes: &[
            "Not mentioning previous refusal",
            "Insufficient explanation",
            "No evidence of changed circumstances",
        ],
        base_required: false,
    },
];

pub fn question(key: &str) -> Option<&'static Question> {
    UK_STUDENT_QUESTIONS.iter().find(|q| q.key == key)
}

pub fn document(key: &str) -> Option<&'static DocumentSpec> {
    UK_STUDENT_DOCUMENTS.iter().find(|d| d.key == key)
}
