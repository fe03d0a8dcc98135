//! Wire types for the Ollama `/api/chat` endpoint.

use serde::{Deserialize, Serialize};

/// Model asked to write the commit message.
pub const MODEL: &str = "qwen2.5-coder:7b";

/// Instruction appended after the fenced diff.
pub const COMMIT_INSTRUCTION: &str = "Generate a commit message for the above set of changes. First, give a single sentence, no more than 80 characters. Then, after 2 line breaks, give a list of no more than 5 short bullet points, each no more than 40 characters. Output nothing except for the commit message, and don't surround it in quotes.";

/// A single chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request envelope for a non-streaming chat completion.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub stream: bool,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Build the one-message request asking for a commit message for `diff`.
    pub fn for_diff(diff: &str) -> Self {
        Self {
            model: MODEL.to_string(),
            stream: false,
            messages: vec![ChatMessage::user(build_prompt(diff))],
        }
    }
}

/// Embed the diff in a fenced block followed by the fixed instruction.
pub fn build_prompt(diff: &str) -> String {
    format!("```{diff}```\n\n{COMMIT_INSTRUCTION}")
}

/// Response envelope. Only `message.content` is consumed; everything else
/// the server sends is discarded.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: ResponseMessage,
}

/// The assistant message inside the response.
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}
