//! Completion provider integration for ClueStory.
//!
//! [`OpenAiCompatibleClient`] speaks the chat-completions wire shape shared by
//! OpenAI and compatible gateways: `{model, messages, max_tokens |
//! max_completion_tokens, response_format?}` in, `{choices: [{message:
//! {content}}]}` or `{error: {message}}` out.
//!
//! ```no_run
//! use cluestory_core::{ApiKey, CompletionOptions, CompletionRequest};
//! use cluestory_interface::CompletionDriver;
//! use cluestory_models::OpenAiCompatibleClient;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiCompatibleClient::openai(Duration::from_secs(120))?;
//! let request = CompletionRequest::prompt(
//!     "gpt-4o-mini",
//!     "You write children's adventure stories.",
//!     "Write one sentence about a dragon.",
//!     CompletionOptions::text(200),
//! );
//! let text = client.complete(&ApiKey::new("sk-..."), &request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dto;
mod openai_compat;

pub use dto::{
    ApiErrorBody, ApiErrorDetail, ChatCompletionRequest, ChatCompletionResponse, Choice,
    ChoiceMessage, ResponseFormat, TokenLimitField,
};
pub use openai_compat::{OPENAI_CHAT_COMPLETIONS_URL, OpenAiCompatibleClient};
