//! scriba - A CLI tool that writes a commit message for your staged changes.
//!
//! # Overview
//!
//! scriba captures the staged diff from git, embeds it in a prompt, sends the
//! prompt to a local Ollama server's chat endpoint, and prints the generated
//! commit message to stdout. The server address comes from `OLLAMA_HOST`,
//! falling back to `http://127.0.0.1:11434`.

pub mod buffer;
pub mod error;
pub mod git;
pub mod ollama;

// Re-export commonly used types
pub use buffer::ByteBuffer;
pub use error::{AllocationError, CaptureError, ExchangeError};
pub use git::{capture_staged_diff, capture_staged_diff_in, ensure_git_installed};
pub use ollama::{HostAddress, generate_commit_message, host_from_env, resolve_host};
