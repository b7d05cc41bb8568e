use super::ExtractionError;

/// The three upload formats the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Pdf,
    Jpeg,
    Png,
}

impl MimeType {
    /// Parse a declared MIME type; anything outside the supported set is
    /// an [`ExtractionError::UnsupportedFormat`].
    pub fn parse(declared: &str) -> Result<Self, ExtractionError> {
        match declared {
            "application/pdf" => Ok(Self::Pdf),
            "image/jpeg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            other => Err(ExtractionError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Infer the MIME type from a stored filename suffix.
    ///
    /// Unrecognized or missing extensions fall back to PDF. The extension
    /// is trusted as-is: a lying extension routes to the wrong extractor
    /// path, there is no content sniffing.
    pub fn from_file_path(path: &str) -> Self {
        let extension = path
            .rsplit('.')
            .next()
            .filter(|ext| !ext.contains('/'))
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            Some("png") => Self::Png,
            _ => Self::Pdf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}
