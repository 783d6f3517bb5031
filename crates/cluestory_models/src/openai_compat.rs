//! HTTPS chat-completions client.

use crate::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, TokenLimitField};
use async_trait::async_trait;
use cluestory_core::{ApiKey, CompletionRequest};
use cluestory_error::{
    ClueStoryResult, CompletionError, CompletionErrorKind, HttpError,
};
use cluestory_interface::CompletionDriver;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// OpenAI chat-completions endpoint.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Client for any endpoint speaking the chat-completions wire shape.
///
/// Holds only the network client and endpoint; the credential arrives with
/// each call.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    endpoint: String,
    token_limit_field: TokenLimitField,
    provider: &'static str,
}

impl OpenAiCompatibleClient {
    /// Creates a client for `endpoint` with a whole-request timeout.
    ///
    /// A timeout expiry surfaces as a `Transport` error.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        provider: &'static str,
    ) -> Result<Self, HttpError> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::new(&endpoint, e.to_string()))?;
        debug!(endpoint = %endpoint, provider, "Creating chat-completions client");
        Ok(Self {
            client,
            endpoint,
            token_limit_field: TokenLimitField::default(),
            provider,
        })
    }

    /// Creates a client for the OpenAI endpoint.
    pub fn openai(timeout: Duration) -> Result<Self, HttpError> {
        Self::new(OPENAI_CHAT_COMPLETIONS_URL, timeout, "openai")
    }

    /// Choose the request field that carries the token budget.
    pub fn with_token_limit_field(mut self, field: TokenLimitField) -> Self {
        self.token_limit_field = field;
        self
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Extract a human-readable message from an error body.
    ///
    /// Uses the structured `error.message` when present, else the raw body.
    fn error_message(body: &str, status: reqwest::StatusCode) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) if !parsed.error.message.trim().is_empty() => parsed.error.message,
            _ if !body.trim().is_empty() => body.to_string(),
            _ => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        }
    }
}

#[async_trait]
impl CompletionDriver for OpenAiCompatibleClient {
    #[instrument(
        skip(self, credential, request),
        fields(provider = self.provider, model = %request.model(), json_mode = *request.json_mode())
    )]
    async fn complete(
        &self,
        credential: &ApiKey,
        request: &CompletionRequest,
    ) -> ClueStoryResult<String> {
        let body = ChatCompletionRequest::from_request(request, self.token_limit_field);
        debug!("Sending chat-completions request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, timeout = e.is_timeout(), "Completion request failed");
                CompletionError::new(CompletionErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read completion body");
            CompletionError::new(CompletionErrorKind::Transport(e.to_string()))
        })?;

        if !status.is_success() {
            let message = Self::error_message(&text, status);
            error!(status = %status, message = %message, "Completion endpoint returned error");
            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "Completion body is not a chat-completions object");
            CompletionError::new(CompletionErrorKind::EmptyResponse(format!(
                "undecodable body: {}",
                e
            )))
        })?;

        let content = parsed.first_text().ok_or_else(|| {
            CompletionError::new(CompletionErrorKind::EmptyResponse(
                "no completion text".to_string(),
            ))
        })?;

        debug!(length = content.len(), "Received completion");
        Ok(content)
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }
}
