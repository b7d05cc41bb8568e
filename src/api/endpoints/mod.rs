pub mod answers;
pub mod checklist;
pub mod documents;
pub mod profiles;
pub mod questions;
pub mod reviews;
