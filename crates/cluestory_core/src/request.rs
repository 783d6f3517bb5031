//! Chat-completion request type.

use crate::ChatMessage;
use cluestory_error::BuilderError;
use serde::{Deserialize, Serialize};

/// Per-call knobs of a completion: JSON mode and output budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Ask the endpoint for a JSON object response
    pub json_mode: bool,
    /// Maximum completion tokens
    pub max_tokens: u32,
}

impl CompletionOptions {
    /// Free-text output.
    pub fn text(max_tokens: u32) -> Self {
        Self {
            json_mode: false,
            max_tokens,
        }
    }

    /// JSON object output.
    pub fn json(max_tokens: u32) -> Self {
        Self {
            json_mode: true,
            max_tokens,
        }
    }
}

/// Provider-neutral completion request.
///
/// # Examples
///
/// ```
/// use cluestory_core::{ChatMessage, CompletionRequest};
///
/// let request = CompletionRequest::builder()
///     .model("gpt-4o-mini")
///     .messages(vec![ChatMessage::user("Hello")])
///     .max_tokens(100u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert!(!request.json_mode());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), build_fn(error = "BuilderError", validate = "Self::validate"))]
pub struct CompletionRequest {
    /// Model identifier
    model: String,
    /// System preamble followed by the prompt
    messages: Vec<ChatMessage>,
    /// Maximum completion tokens
    max_tokens: u32,
    /// Request a JSON object response
    #[builder(default)]
    json_mode: bool,
    /// Sampling temperature, provider default when absent
    #[builder(default)]
    temperature: Option<f32>,
}

impl CompletionRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(messages) = &self.messages
            && messages.is_empty()
        {
            return Err("messages must not be empty".to_string());
        }
        if self.max_tokens == Some(0) {
            return Err("max_tokens must be positive".to_string());
        }
        Ok(())
    }
}

impl CompletionRequest {
    /// Creates a new request builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// A system preamble plus one user prompt.
    pub fn prompt(
        model: impl Into<String>,
        system_preamble: impl Into<String>,
        prompt: impl Into<String>,
        options: CompletionOptions,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage::system(system_preamble),
                ChatMessage::user(prompt),
            ],
            max_tokens: options.max_tokens,
            json_mode: options.json_mode,
            temperature: None,
        }
    }

    /// Text of the last user message.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::Role::User)
            .map(|m| m.content.as_str())
    }
}
