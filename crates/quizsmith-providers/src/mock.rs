//! Mock generator for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizsmith_core::traits::{
    GenerateRequest, GenerateResponse, ModelInfo, TextGenerator, TokenUsage,
};

const DEFAULT_RESPONSE: &str = "\
1. Water boils at 100 degrees Celsius at sea level - True
2. The Great Wall of China is visible from the Moon with the naked eye - False
3. Sound travels faster in water than in air - True";

/// A mock generative backend for exercising the pipeline without real API
/// calls.
///
/// Returns configurable responses based on prompt substring matching.
pub struct MockGenerator {
    /// Map of prompt substring → response text.
    responses: HashMap<String, String>,
    /// Default response if no prompt matches.
    default_response: String,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<GenerateRequest>>,
    /// When set, every call fails with this message.
    failure: Option<String>,
}

impl MockGenerator {
    /// Create a new mock with the given prompt→response mappings.
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self {
            responses,
            default_response: DEFAULT_RESPONSE.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
            failure: None,
        }
    }

    /// Create a mock that always returns the same response.
    pub fn with_fixed_response(response: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: response.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
            failure: None,
        }
    }

    /// Create a mock whose every call fails.
    pub fn failing(message: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: String::new(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
            failure: Some(message.to_string()),
        }
    }

    /// Get the number of calls made to this generator.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this generator.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(message) = &self.failure {
            anyhow::bail!("{message}");
        }

        let content = self
            .responses
            .iter()
            .find(|(key, _)| request.prompt.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_response.clone());

        let completion_tokens = (content.len() / 4) as u32; // Rough estimate
        let prompt_tokens = (request.prompt.len() / 4) as u32;

        Ok(GenerateResponse {
            content,
            model: request.model.clone(),
            token_usage: TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
            latency_ms: 1,
        })
    }

    fn available_models(&self) -> Vec<ModelInfo> {
        vec![ModelInfo {
            id: "mock-model".into(),
            name: "Mock Model".into(),
            provider: "mock".into(),
            max_context: 100_000,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: "mock-model".into(),
            prompt: prompt.into(),
            max_output_tokens: 256,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn default_response_parses_into_questions() {
        let generator = MockGenerator::default();
        let response = generator.generate(&request("anything")).await.unwrap();
        let questions = quizsmith_core::parser::parse_questions(&response.content);
        assert_eq!(questions.len(), 3);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn prompt_matching() {
        let mut responses = HashMap::new();
        responses.insert(
            "biology".to_string(),
            "1. Mitochondria produce ATP - True".to_string(),
        );
        responses.insert(
            "history".to_string(),
            "1. The armistice was signed in November - True".to_string(),
        );

        let generator = MockGenerator::new(responses);

        let resp = generator
            .generate(&request("questions about biology"))
            .await
            .unwrap();
        assert!(resp.content.contains("Mitochondria"));

        let resp = generator
            .generate(&request("questions about history"))
            .await
            .unwrap();
        assert!(resp.content.contains("armistice"));
        assert_eq!(generator.call_count(), 2);
    }

    #[tokio::test]
    async fn failing_mock_errors() {
        let generator = MockGenerator::failing("simulated outage");
        let err = generator.generate(&request("anything")).await.unwrap_err();
        assert!(err.to_string().contains("simulated outage"));
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn records_last_request() {
        let generator = MockGenerator::default();
        generator
            .generate(&request("Generate exactly 4 questions."))
            .await
            .unwrap();
        let last = generator.last_request().unwrap();
        assert!(last.prompt.contains("exactly 4"));
    }
}
