//! Completion backend trait.

use async_trait::async_trait;
use cluestory_core::{ApiKey, CompletionRequest};
use cluestory_error::ClueStoryResult;
use std::sync::Arc;

/// Core trait every completion backend implements.
///
/// One call is one HTTP request; implementations never retry. The credential
/// is passed per call so a backend holds no secret of its own.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send one request and return the raw completion text.
    ///
    /// # Errors
    ///
    /// `Transport` when the endpoint is unreachable or times out, `Api` on a
    /// non-success status, `EmptyResponse` when a success carries no text.
    async fn complete(
        &self,
        credential: &ApiKey,
        request: &CompletionRequest,
    ) -> ClueStoryResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<D: CompletionDriver + ?Sized> CompletionDriver for Arc<D> {
    async fn complete(
        &self,
        credential: &ApiKey,
        request: &CompletionRequest,
    ) -> ClueStoryResult<String> {
        (**self).complete(credential, request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
