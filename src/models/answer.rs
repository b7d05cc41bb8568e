use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One onboarding answer for a profile. At most one current value exists
/// per `(profile_id, question_key)` — saving an existing key overwrites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub question_key: String,
    pub value: String,
    pub created_at: NaiveDateTime,
}

/// Current answers for one profile, keyed by question key.
///
/// Absent keys mean "unknown" to every consumer — never an error. The
/// checklist rule engine must produce a result for any `AnswerSet`,
/// including the empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet(HashMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse an answer list into the current value per key.
    pub fn from_answers(answers: &[Answer]) -> Self {
        Self(
            answers
                .iter()
                .map(|a| (a.question_key.clone(), a.value.clone()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Answer value for prompt embedding — `"Unknown"` when absent.
    pub fn get_or_unknown(&self, key: &str) -> &str {
        self.get(key).unwrap_or("Unknown")
    }

    pub fn is(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
