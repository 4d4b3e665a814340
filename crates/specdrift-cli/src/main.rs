//! specdrift CLI
//!
//! Command-line interface for spec drift detection and AI contract-test
//! generation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "specdrift")]
#[command(about = "API spec drift detection with AI contract-test generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two spec JSON files and print detected changes
    Compare(commands::compare::CompareArgs),
    /// Compare two specs and generate contract tests via a local Ollama model
    GenerateTests(commands::generate::GenerateArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::GenerateTests(args) => commands::generate::execute(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("specdrift=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
