//! Quiz generation orchestration.
//!
//! Builds the prompt, awaits the generative backend, parses the reply, and
//! truncates to the requested count. A provider failure is caught and
//! logged, yielding zero questions; a short reply is a warning, not an
//! error.

use crate::model::Question;
use crate::parser::parse_questions;
use crate::prompt::build_prompt;
use crate::traits::{GenerateRequest, TextGenerator};

/// Generation parameters passed through to the backend.
#[derive(Debug, Clone)]
pub struct QuizGenOptions {
    /// Model identifier.
    pub model: String,
    /// Maximum tokens the backend may generate.
    pub max_output_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for QuizGenOptions {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            max_output_tokens: 2048,
            temperature: 0.7,
        }
    }
}

/// Generate up to `num_questions` questions from already-filtered text.
///
/// Returns an empty list when `num_questions` is zero or when the backend
/// call fails (the failure is logged, not propagated). Returns fewer than
/// `num_questions` entries when the model produced fewer parseable lines.
pub async fn generate_quiz(
    generator: &dyn TextGenerator,
    text: &str,
    num_questions: usize,
    opts: &QuizGenOptions,
) -> Vec<Question> {
    if num_questions == 0 {
        return Vec::new();
    }

    let request = GenerateRequest {
        model: opts.model.clone(),
        prompt: build_prompt(text, num_questions),
        max_output_tokens: opts.max_output_tokens,
        temperature: opts.temperature,
    };

    let response = match generator.generate(&request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(provider = generator.name(), "question generation failed: {e:#}");
            return Vec::new();
        }
    };

    let mut questions = parse_questions(&response.content);
    if questions.len() < num_questions {
        tracing::warn!(
            "only {} of {} requested questions were generated",
            questions.len(),
            num_questions
        );
    }
    questions.truncate(num_questions);
    questions
}
