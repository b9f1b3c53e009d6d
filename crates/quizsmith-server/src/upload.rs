//! The `POST /upload` handler.
//!
//! Multipart form: repeated `files` parts plus a `numQuestions` text part.
//! Files are stored first, then PDF text is extracted, filtered, and fed to
//! the generative backend. The generation call is awaited inline; there is
//! no retry and no rollback of already-stored files on failure.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use quizsmith_core::engine::generate_quiz;
use quizsmith_core::filter::filter_relevant_content;
use quizsmith_core::model::Question;
use quizsmith_extract::DocumentKind;

use crate::error::ApiError;
use crate::storage::SavedUpload;
use crate::AppState;

/// Success envelope for an upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub files: Vec<SavedUpload>,
    pub questions: Vec<Question>,
}

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut num_questions_raw: Option<String> = None;
    let mut saved = Vec::new();
    let mut combined = String::new();

    while let Some(field) = multipart.next_field().await.map_err(anyhow::Error::new)? {
        match field.name() {
            Some("numQuestions") => {
                num_questions_raw = Some(field.text().await.map_err(anyhow::Error::new)?);
            }
            Some("files") => {
                let original_name = field
                    .file_name()
                    .map(str::to_owned)
                    .unwrap_or_default();
                let bytes = field.bytes().await.map_err(anyhow::Error::new)?;

                // Extension check happens before the file is stored.
                let kind = DocumentKind::from_path(Path::new(&original_name))?;
                let upload = state
                    .store
                    .save(&original_name, kind, &bytes)
                    .await?;

                if kind == DocumentKind::Pdf {
                    tracing::info!("processing PDF file: {original_name}");
                    let text = state.extractor.extract(kind, &bytes)?;
                    if text.trim().is_empty() {
                        tracing::warn!("no extractable text in {original_name}");
                    } else {
                        combined.push_str(&filter_relevant_content(&text));
                        combined.push('\n');
                    }
                }

                saved.push(upload);
            }
            _ => {}
        }
    }

    if saved.is_empty() {
        return Err(ApiError::NoFilesUploaded);
    }

    let raw = num_questions_raw.ok_or_else(|| ApiError::InvalidQuestionCount("missing".into()))?;
    let num_questions: usize = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidQuestionCount(raw.clone()))?;

    if combined.trim().is_empty() && num_questions > 0 {
        return Err(ApiError::NoExtractableContent);
    }

    let questions = if num_questions > 0 {
        let questions = generate_quiz(
            state.generator.as_ref(),
            &combined,
            num_questions,
            &state.gen_opts,
        )
        .await;
        if questions.is_empty() {
            return Err(ApiError::NoQuestionsGenerated);
        }
        questions
    } else {
        Vec::new()
    };

    Ok(Json(UploadResponse {
        message: "files uploaded successfully".to_string(),
        files: saved,
        questions,
    }))
}
