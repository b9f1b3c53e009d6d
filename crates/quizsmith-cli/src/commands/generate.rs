//! The `quizsmith generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use quizsmith_core::engine::{generate_quiz, QuizGenOptions};
use quizsmith_core::filter::filter_relevant_content;
use quizsmith_core::model::Question;
use quizsmith_extract::{DocumentKind, DocumentTextExtractor, TextExtractor};
use quizsmith_providers::config::{create_provider, load_config_from, QuizsmithConfig};

pub async fn execute(
    documents: Vec<PathBuf>,
    num_questions: Option<usize>,
    provider: Option<String>,
    model: Option<String>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let questions =
        generate_from_documents(&config, &documents, num_questions, provider, model).await?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&questions)?),
        "table" => print_questions(&questions),
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&questions)?)
            .with_context(|| format!("failed to write questions to {}", path.display()))?;
        eprintln!("Questions saved to: {}", path.display());
    }

    Ok(())
}

/// Shared document→questions pipeline: extract, filter, prompt, parse.
pub(crate) async fn generate_from_documents(
    config: &QuizsmithConfig,
    documents: &[PathBuf],
    num_questions: Option<usize>,
    provider: Option<String>,
    model: Option<String>,
) -> Result<Vec<Question>> {
    let num_questions = num_questions.unwrap_or(config.default_num_questions);
    anyhow::ensure!(num_questions >= 1, "at least one question must be requested");

    let extractor = DocumentTextExtractor;
    let mut combined = String::new();

    for path in documents {
        let kind = DocumentKind::from_path(path)?;
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read document: {}", path.display()))?;
        let text = extractor.extract(kind, &bytes)?;

        if text.trim().is_empty() {
            tracing::warn!("no extractable text in {}", path.display());
            continue;
        }
        combined.push_str(&filter_relevant_content(&text));
        combined.push('\n');
    }

    anyhow::ensure!(
        !combined.trim().is_empty(),
        "no relevant content could be extracted from the given documents"
    );

    let provider_name = provider.unwrap_or_else(|| config.default_provider.clone());
    let provider_config = config.providers.get(&provider_name).ok_or_else(|| {
        anyhow::anyhow!(
            "provider '{provider_name}' not found in config. Available: {:?}",
            config.providers.keys().collect::<Vec<_>>()
        )
    })?;
    let generator = create_provider(&provider_name, provider_config)?;

    let opts = QuizGenOptions {
        model: model.unwrap_or_else(|| config.default_model.clone()),
        max_output_tokens: config.max_output_tokens,
        temperature: config.temperature,
    };

    let questions = generate_quiz(generator.as_ref(), &combined, num_questions, &opts).await;
    anyhow::ensure!(
        !questions.is_empty(),
        "no questions could be generated from the given documents"
    );

    Ok(questions)
}

fn print_questions(questions: &[Question]) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answer"]);
    for (i, q) in questions.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            q.question.clone(),
            q.answer.to_string(),
        ]);
    }
    println!("{table}");
}
