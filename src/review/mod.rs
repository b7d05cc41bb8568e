//! AI-assisted document review: closed prompt template, completion-service
//! client, strict response validation, and a fail-safe orchestrator.

pub mod openai;
pub mod parser;
pub mod prompt;
pub mod reviewer;

pub use openai::{CompletionClient, FailingCompletionClient, MockCompletionClient, OpenAiClient};
pub use reviewer::DocumentReviewer;

use thiserror::Error;

/// Internal failures of the review stage.
///
/// Never escapes [`DocumentReviewer::review`]: every variant — transport
/// and malformed-output alike — is absorbed into the fallback review.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("completion service unreachable at {0}")]
    Connection(String),

    #[error("completion service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("response parsing error: {0}")]
    ResponseParsing(String),

    #[error("completion response was empty")]
    EmptyResponse,

    #[error("malformed review JSON: {0}")]
    JsonParsing(String),

    #[error("incomplete review structure: {0}")]
    Validation(String),
}
