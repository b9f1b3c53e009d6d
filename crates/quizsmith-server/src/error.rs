//! Request-boundary error taxonomy.
//!
//! Every failure is converted to a JSON `{"error": ...}` envelope here. The
//! 400-level variants carry user-facing messages; anything unexpected
//! becomes a generic 500 with the detail logged server-side only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use quizsmith_extract::ExtractError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The multipart request contained no file parts.
    #[error("no files were uploaded")]
    NoFilesUploaded,

    /// A file's extension is not in the allow-list.
    #[error("file type not allowed: {0}")]
    UnsupportedFileType(String),

    /// The `numQuestions` field was missing or not an integer.
    #[error("invalid numQuestions value: {0}")]
    InvalidQuestionCount(String),

    /// Questions were requested but no text survived extraction and
    /// filtering.
    #[error("no relevant content could be extracted from the uploaded files")]
    NoExtractableContent,

    /// The generative backend produced nothing usable.
    #[error("no questions could be generated from the uploaded content")]
    NoQuestionsGenerated,

    /// Anything else. The message shown to the client stays generic.
    #[error("an error occurred while processing the files")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            tracing::error!("upload processing failed: {e:#}");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<ExtractError> for ApiError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::UnsupportedType(name) => ApiError::UnsupportedFileType(name),
            other @ ExtractError::Extraction { .. } => ApiError::Internal(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::NoFilesUploaded.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NoQuestionsGenerated.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_message_is_generic() {
        let e = ApiError::Internal(anyhow::anyhow!("disk exploded at /var/data"));
        assert!(!e.to_string().contains("disk exploded"));
    }

    #[test]
    fn unsupported_extension_converts_from_extract_error() {
        let e: ApiError = ExtractError::UnsupportedType("setup.exe".into()).into();
        assert!(matches!(e, ApiError::UnsupportedFileType(name) if name == "setup.exe"));
    }
}
