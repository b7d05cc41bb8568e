//! Text extraction for uploaded visa documents.
//!
//! PDF uploads go through digital text-layer extraction plus whitespace
//! normalization. Image uploads are not OCRed — they yield a fixed
//! placeholder so the rest of the pipeline keeps working while making it
//! obvious that no text was read.

pub mod mime;
pub mod normalize;
pub mod pdf;

pub use mime::MimeType;
pub use normalize::normalize_text;

use thiserror::Error;

/// Returned for image uploads instead of extracted text. Callers must not
/// treat this as a real extraction result.
pub const IMAGE_PLACEHOLDER: &str =
    "[Image document - text extraction not yet supported. Manual review required.]";

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("unsupported document type: {0}")]
    UnsupportedFormat(String),

    #[error("PDF text extraction failed: {0}")]
    PdfParsing(String),

    #[error("document contains no extractable text")]
    EmptyText,
}

/// Extract normalized plain text from an uploaded document.
///
/// A PDF from which no text can be derived is an error, never an empty
/// success. The image path always succeeds with [`IMAGE_PLACEHOLDER`],
/// regardless of the bytes.
pub fn extract_document_text(bytes: &[u8], mime: MimeType) -> Result<String, ExtractionError> {
    match mime {
        MimeType::Pdf => {
            let raw = pdf::extract_pdf_text(bytes)?;
            let text = normalize::normalize_text(&raw);
            if text.is_empty() {
                return Err(ExtractionError::EmptyText);
            }
            Ok(text)
        }
        MimeType::Jpeg | MimeType::Png => Ok(IMAGE_PLACEHOLDER.to_string()),
    }
}
