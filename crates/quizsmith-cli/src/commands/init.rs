//! The `quizsmith init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizsmith.toml").exists() {
        println!("quizsmith.toml already exists, skipping.");
    } else {
        std::fs::write("quizsmith.toml", SAMPLE_CONFIG)?;
        println!("Created quizsmith.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizsmith.toml (or export GEMINI_API_KEY)");
    println!("  2. Run: quizsmith generate --document notes.pdf --num-questions 5");
    println!("  3. Or start the server: quizsmith serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizsmith configuration

[providers.gemini]
type = "gemini"
api_key = "${GEMINI_API_KEY}"

[providers.ollama]
type = "ollama"
base_url = "http://localhost:11434"

default_provider = "gemini"
default_model = "gemini-pro"
default_num_questions = 5
temperature = 0.7
max_output_tokens = 2048
upload_dir = "./uploads"
listen_addr = "127.0.0.1:7002"
"#;
