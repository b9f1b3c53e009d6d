//! PDF text extraction via the `pdf-extract` crate.

use crate::{DocumentKind, ExtractError};

/// Extract plain text from PDF bytes.
///
/// Image-only PDFs extract successfully to (near-)empty text; that case is
/// the caller's to handle.
pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Extraction {
        kind: DocumentKind::Pdf,
        message: e.to_string(),
    })
}
