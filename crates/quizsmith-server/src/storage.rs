//! Upload storage with randomized filenames.
//!
//! Files are stored flat under one directory as `<uuid><ext>`, so
//! concurrent uploads from different clients cannot collide. Nothing is
//! rolled back on a later failure in the same request.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use quizsmith_extract::DocumentKind;

/// Bookkeeping for one stored upload. Field names match the wire format.
#[derive(Debug, Clone, Serialize)]
pub struct SavedUpload {
    /// The client-supplied filename.
    #[serde(rename = "originalname")]
    pub original_name: String,
    /// The randomized on-disk filename.
    #[serde(rename = "savedName")]
    pub saved_name: String,
    /// Full path of the stored file.
    pub path: String,
    /// When the file was stored.
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

/// The upload directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create upload dir: {}", self.dir.display()))
    }

    /// Store `bytes` under a fresh randomized name, keeping the document's
    /// canonical extension.
    pub async fn save(
        &self,
        original_name: &str,
        kind: DocumentKind,
        bytes: &[u8],
    ) -> Result<SavedUpload> {
        self.ensure_dir().await?;

        let saved_name = format!("{}{}", Uuid::new_v4(), kind.extension());
        let path = self.dir.join(&saved_name);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to store upload: {}", path.display()))?;

        Ok(SavedUpload {
            original_name: original_name.to_string(),
            saved_name,
            path: path.display().to_string(),
            saved_at: Utc::now(),
        })
    }
}
