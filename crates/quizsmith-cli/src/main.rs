//! quizsmith CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizsmith", version, about = "True/false quiz generation from documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP upload server
    Serve {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Listen address (overrides config)
        #[arg(long)]
        addr: Option<String>,

        /// Upload directory (overrides config)
        #[arg(long)]
        upload_dir: Option<PathBuf>,

        /// Static asset directory served at / (overrides config)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Generate questions from documents
    Generate {
        /// Document to read (repeatable)
        #[arg(long = "document", required = true)]
        documents: Vec<PathBuf>,

        /// How many questions to request
        #[arg(long)]
        num_questions: Option<usize>,

        /// Provider name from the config
        #[arg(long)]
        provider: Option<String>,

        /// Model identifier
        #[arg(long)]
        model: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Also save the questions as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Play an interactive quiz in the terminal
    Quiz {
        /// Document to read (repeatable)
        #[arg(long = "document")]
        documents: Vec<PathBuf>,

        /// Play a previously saved question list instead of generating
        #[arg(long)]
        questions: Option<PathBuf>,

        /// How many questions to request
        #[arg(long)]
        num_questions: Option<usize>,

        /// Provider name from the config
        #[arg(long)]
        provider: Option<String>,

        /// Model identifier
        #[arg(long)]
        model: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List available models
    ListModels {
        /// Filter to specific provider
        #[arg(long)]
        provider: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizsmith=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            config,
            addr,
            upload_dir,
            static_dir,
        } => commands::serve::execute(config, addr, upload_dir, static_dir).await,
        Commands::Generate {
            documents,
            num_questions,
            provider,
            model,
            format,
            output,
            config,
        } => {
            commands::generate::execute(
                documents,
                num_questions,
                provider,
                model,
                format,
                output,
                config,
            )
            .await
        }
        Commands::Quiz {
            documents,
            questions,
            num_questions,
            provider,
            model,
            config,
        } => {
            commands::quiz::execute(documents, questions, num_questions, provider, model, config)
                .await
        }
        Commands::ListModels { provider, config } => {
            commands::list_models::execute(provider, config).await
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
