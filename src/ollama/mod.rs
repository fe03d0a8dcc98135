//! Ollama integration: endpoint resolution and the single chat exchange.

pub mod exchange;
pub mod host;
pub mod protocol;

pub use exchange::generate_commit_message;
pub use host::{HostAddress, host_from_env, resolve_host};
pub use protocol::{COMMIT_INSTRUCTION, ChatMessage, ChatRequest, ChatResponse, MODEL, build_prompt};
