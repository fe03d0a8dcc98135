//! Error types for scriba modules using thiserror.

use std::collections::TryReserveError;

use thiserror::Error;

/// The buffer could not grow to hold the requested bytes.
///
/// Memory exhaustion is unrecoverable for this tool; the error is reported
/// once and the process exits. A failed append leaves the buffer's previous
/// contents intact.
#[derive(Error, Debug)]
#[error("Failed to allocate {requested} additional bytes: {source}")]
pub struct AllocationError {
    pub requested: usize,
    #[source]
    pub source: TryReserveError,
}

/// Errors from staged-diff capture.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("git not found in PATH. Install git and make sure it is on your PATH")]
    GitNotInstalled,

    #[error("Failed to spawn `git diff --staged`: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Failed to read from `git diff --staged`: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("`git diff --staged` exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

/// Errors from the chat request/response exchange.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Request to the Ollama server failed: {0}")]
    TransportFailed(#[source] reqwest::Error),

    #[error("Ollama response did not contain a `message.content` string: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}
