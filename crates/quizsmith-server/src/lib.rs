//! quizsmith-server — HTTP surface for document upload and quiz generation.
//!
//! One route does the work: `POST /upload` accepts multipart documents plus
//! a question count, stores the files, extracts and filters their text, and
//! returns generated questions. A static directory can be mounted at `/`
//! for a browser client.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use quizsmith_core::engine::QuizGenOptions;
use quizsmith_core::traits::TextGenerator;
use quizsmith_extract::TextExtractor;

pub mod error;
pub mod storage;
pub mod upload;

pub use error::ApiError;
pub use storage::{SavedUpload, UploadStore};

/// Uploads larger than this are rejected outright.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application state shared across routes.
#[derive(Clone)]
pub struct AppState {
    /// The generative backend.
    pub generator: Arc<dyn TextGenerator>,
    /// Document-bytes-to-text extraction.
    pub extractor: Arc<dyn TextExtractor>,
    /// Where uploaded files are stored.
    pub store: UploadStore,
    /// Generation parameters (model, temperature, token budget).
    pub gen_opts: QuizGenOptions,
}

/// Build the application router.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/upload", post(upload::upload))
        .route("/health", get(|| async { "OK" }));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState, static_dir: Option<PathBuf>) -> Result<()> {
    state.store.ensure_dir().await?;
    let app = app(state, static_dir.as_deref());

    info!("quizsmith server listening on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
