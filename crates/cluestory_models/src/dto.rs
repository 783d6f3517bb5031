//! Chat-completions data transfer objects.

use cluestory_core::{ChatMessage, CompletionRequest};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which request field carries the output budget.
///
/// Older models accept `max_tokens`; newer reasoning models only accept
/// `max_completion_tokens`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TokenLimitField {
    /// `max_tokens`
    #[default]
    MaxTokens,
    /// `max_completion_tokens`
    MaxCompletionTokens,
}

/// `response_format` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Always `json_object` when present
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// `{"type": "json_object"}`
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// Request body sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// System preamble and prompt
    messages: Vec<ChatMessage>,
    /// Budget under the legacy field name
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Budget under the newer field name
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    /// JSON mode
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl ChatCompletionRequest {
    /// Translate a provider-neutral request into the wire body.
    pub fn from_request(request: &CompletionRequest, field: TokenLimitField) -> Self {
        let budget = *request.max_tokens();
        let (max_tokens, max_completion_tokens) = match field {
            TokenLimitField::MaxTokens => (Some(budget), None),
            TokenLimitField::MaxCompletionTokens => (None, Some(budget)),
        };
        Self {
            model: request.model().clone(),
            messages: request.messages().clone(),
            max_tokens,
            max_completion_tokens,
            response_format: request
                .json_mode()
                .then(ResponseFormat::json_object),
            temperature: *request.temperature(),
        }
    }
}

/// Message inside a choice. `content` is null for refusals and tool calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Completion text
    #[serde(default)]
    pub content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The generated message
    pub message: ChoiceMessage,
}

/// Success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Choices, normally exactly one
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if non-blank.
    pub fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
    }
}

/// Detail of a structured error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Provider message
    pub message: String,
}

/// `{"error": {"message": ...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error detail
    pub error: ApiErrorDetail,
}
