//! Completion request type for the oracle boundary.

use crate::Message;
use serde::{Deserialize, Serialize};

/// An OpenAI-compatible chat completion request.
///
/// Serializes directly as the request body for a `/chat/completions` call.
/// Classification is not a generative task, so callers pin `temperature`
/// (the pipeline always uses `0.0`); the field is mandatory rather than
/// optional to keep that choice visible.
///
/// # Examples
///
/// ```
/// use saro_core::CompletionRequest;
///
/// let request = CompletionRequest::new(
///     "gpt-4o-mini",
///     "Eres un analista experto en riesgo operacional.",
///     "Clasifica el siguiente evento.",
///     0.0,
/// );
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.temperature, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model identifier to use
    pub model: String,
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Sampling temperature; `0.0` for deterministic classification
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a single-turn request from a system prompt and a user prompt.
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::system(system_prompt), Message::user(user_prompt)],
            temperature,
        }
    }

    /// Create a builder for assembling a request field by field.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_chat_completion_body() {
        let request = CompletionRequest::new("gpt-4o-mini", "system text", "user text", 0.0);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "system text");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "user text");
    }

    #[test]
    fn builder_assembles_request() {
        let request = CompletionRequest::builder()
            .model("gpt-4o-mini")
            .messages(vec![crate::Message::user("hola")])
            .temperature(0.0f32)
            .build()
            .unwrap();

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 1);
    }
}
