//! The `quizsmith list-models` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use quizsmith_core::traits::ModelInfo;
use quizsmith_providers::config::{create_provider, load_config_from, ProviderConfig};
use quizsmith_providers::ollama::OllamaProvider;

pub async fn execute(provider_filter: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut models: Vec<ModelInfo> = Vec::new();
    for (name, provider_config) in &config.providers {
        if let Some(filter) = &provider_filter {
            if name != filter {
                continue;
            }
        }

        match provider_config {
            ProviderConfig::Ollama { base_url } => {
                match OllamaProvider::new(base_url).list_models_async().await {
                    Ok(found) => models.extend(found),
                    Err(e) => eprintln!("Warning: could not list {name} models: {e:#}"),
                }
            }
            _ => match create_provider(name, provider_config) {
                Ok(provider) => models.extend(provider.available_models()),
                Err(e) => eprintln!("Warning: skipping provider {name}: {e:#}"),
            },
        }
    }

    if models.is_empty() {
        println!("No models available. Check your provider configuration.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Provider", "Model", "Name", "Context"]);
    for m in &models {
        let context = if m.max_context == 0 {
            "-".to_string()
        } else {
            m.max_context.to_string()
        };
        table.add_row(vec![m.provider.clone(), m.id.clone(), m.name.clone(), context]);
    }
    println!("{table}");

    Ok(())
}
