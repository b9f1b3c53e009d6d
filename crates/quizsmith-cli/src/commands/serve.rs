//! The `quizsmith serve` command.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use quizsmith_core::engine::QuizGenOptions;
use quizsmith_extract::DocumentTextExtractor;
use quizsmith_providers::config::{create_provider, load_config_from};
use quizsmith_server::{AppState, UploadStore};

pub async fn execute(
    config_path: Option<PathBuf>,
    addr: Option<String>,
    upload_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let addr: SocketAddr = addr
        .unwrap_or_else(|| config.listen_addr.clone())
        .parse()
        .context("invalid listen address")?;

    let provider_name = config.default_provider.clone();
    let provider_config = config.providers.get(&provider_name).ok_or_else(|| {
        anyhow::anyhow!(
            "provider '{provider_name}' not found in config. Create one with: quizsmith init"
        )
    })?;
    let generator = create_provider(&provider_name, provider_config)?;

    let state = AppState {
        generator: Arc::from(generator),
        extractor: Arc::new(DocumentTextExtractor),
        store: UploadStore::new(upload_dir.unwrap_or_else(|| config.upload_dir.clone())),
        gen_opts: QuizGenOptions {
            model: config.default_model.clone(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        },
    };

    quizsmith_server::serve(addr, state, static_dir.or_else(|| config.static_dir.clone())).await
}
