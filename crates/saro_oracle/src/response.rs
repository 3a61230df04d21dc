//! OpenAI-compatible chat completion response types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters)]
pub struct ChatCompletion {
    /// Unique identifier for the completion
    id: String,
    /// Object type (always "chat.completion")
    object: String,
    /// Unix timestamp of when the completion was created
    created: i64,
    /// Model used for completion
    model: String,
    /// Generated completions
    choices: Vec<Choice>,
    /// Token usage statistics; some compatible services omit this
    usage: Option<Usage>,
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Getters)]
pub struct Choice {
    /// Index of this choice
    index: u32,
    /// The generated message
    message: ChoiceMessage,
    /// Reason why generation finished
    finish_reason: String,
}

/// Message in a choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Getters)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    role: String,
    /// Generated content
    content: String,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Getters)]
pub struct Usage {
    /// Tokens in the prompt
    prompt_tokens: u32,
    /// Tokens in the completion
    completion_tokens: u32,
    /// Total tokens used
    total_tokens: u32,
}
