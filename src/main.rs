//! scriba - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use scriba::git::{capture_staged_diff, ensure_git_installed};
use scriba::ollama::{MODEL, generate_commit_message, host_from_env};

/// Generate a commit message for the staged diff using a local Ollama server.
#[derive(Parser, Debug)]
#[command(name = "scriba")]
#[command(about = "Generate a commit message for the staged diff using a local Ollama server")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the generated message.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    // Step 1: Check prerequisites
    ensure_git_installed().context("git is required")?;

    // Step 2: Resolve the server endpoint
    let endpoint = host_from_env().endpoint_url();

    // Step 3: Capture the staged diff
    let diff = capture_staged_diff()
        .await
        .context("Failed to capture the staged diff")?;

    if diff.is_empty() {
        warn!("staging area is clean; the prompt will contain no diff");
    }

    // Step 4: Ask the model for a commit message
    eprintln!("Generating commit message with {MODEL}...");

    let message = generate_commit_message(&diff, &endpoint)
        .await
        .context("Failed to generate a commit message")?;

    println!("{message}");

    Ok(())
}
