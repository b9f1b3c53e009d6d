//! quizsmith-extract — Document type allow-listing and text extraction.
//!
//! Uploads are accepted by extension only (`.pdf`, `.doc`, `.docx`, `.txt`,
//! `.odt`); of those, only the PDF path actually produces text. The other
//! kinds are recognized at the boundary and yield an empty string.

use std::fmt;
use std::path::Path;

use thiserror::Error;

mod pdf;

/// Errors from document recognition and text extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file extension is not in the allow-list.
    #[error("file type not allowed: {0}")]
    UnsupportedType(String),

    /// The document bytes could not be parsed.
    #[error("failed to extract text from {kind} document: {message}")]
    Extraction { kind: DocumentKind, message: String },
}

/// An accepted document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Txt,
    Odt,
}

impl DocumentKind {
    /// Recognize a document by its file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<DocumentKind, ExtractError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "doc" => Ok(DocumentKind::Doc),
            "docx" => Ok(DocumentKind::Docx),
            "txt" => Ok(DocumentKind::Txt),
            "odt" => Ok(DocumentKind::Odt),
            _ => Err(ExtractError::UnsupportedType(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or(extension),
            )),
        }
    }

    /// The canonical lowercase extension, with the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Doc => ".doc",
            DocumentKind::Docx => ".docx",
            DocumentKind::Txt => ".txt",
            DocumentKind::Odt => ".odt",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension().trim_start_matches('.'))
    }
}

/// Trait for turning document bytes into plain text.
///
/// A seam for tests: the HTTP server and CLI take a `dyn TextExtractor` so
/// request handling can be exercised without real PDF fixtures.
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from `bytes`. May return an empty string for
    /// documents with no extractable text.
    fn extract(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// The production extractor: PDFs go through `pdf-extract`, every other
/// accepted kind is accepted but yields no text.
#[derive(Debug, Default)]
pub struct DocumentTextExtractor;

impl TextExtractor for DocumentTextExtractor {
    fn extract(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
        match kind {
            DocumentKind::Pdf => pdf::extract_text(bytes),
            other => {
                tracing::debug!("no extractor for {other} documents, skipping");
                Ok(String::new())
            }
        }
    }
}
