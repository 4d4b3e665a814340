//! Generate-tests command: diff two specs, then ask a local Ollama model for
//! a contract-test module covering the detected changes.

use anyhow::{Context, Result};
use clap::Args;
use specdrift_core::{diff_specs, load_spec, render_human_summary};
use specdrift_ollama::{
    spec_snippet, OllamaClient, OllamaConfig, DEFAULT_BASE_URL, DEFAULT_MODEL,
    SPEC_SNIPPET_MAX_CHARS,
};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the old spec JSON file
    pub old: PathBuf,

    /// Path to the new spec JSON file
    pub new: PathBuf,

    /// File the generated test module is written to
    #[arg(long, short)]
    pub output: PathBuf,

    /// Ollama model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Ollama server
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub url: Url,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let old = load_spec(&args.old)?;
    let new = load_spec(&args.new)?;

    let changes = diff_specs(&old, &new);
    if changes.is_empty() {
        println!("No differences detected. No tests to generate or update.");
        return Ok(());
    }

    println!("Changes detected between specs:");
    for change in &changes {
        println!("- {change}");
    }

    let diff_summary = render_human_summary(&changes);
    let snippet = spec_snippet(&new, SPEC_SNIPPET_MAX_CHARS);

    println!("\nCalling local LLM via Ollama to generate contract tests...");
    let client = OllamaClient::new(OllamaConfig {
        base_url: args.url,
        model: args.model,
        timeout: Duration::from_secs(args.timeout_secs),
    });
    let test_code = client
        .generate_test_code(&diff_summary, &snippet)
        .await
        .context("failed to generate tests via Ollama")?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(&args.output, &test_code)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("\nGenerated tests written to: {}", args.output.display());
    Ok(())
}
