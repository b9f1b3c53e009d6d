//! quizsmith-providers — Generative API integrations.
//!
//! Implements the `TextGenerator` trait for Gemini and Ollama, plus a mock
//! backend for tests, and carries the application configuration with the
//! provider factory.

pub mod config;
pub mod error;
pub mod gemini;
pub mod mock;
pub mod ollama;

pub use config::{create_provider, load_config, ProviderConfig, QuizsmithConfig};
pub use error::ProviderError;
