//! HTTP client construction errors.

/// The HTTP client for a completion endpoint could not be built.
///
/// Request-level failures are reported as [`crate::CompletionError`] instead.
///
/// # Examples
///
/// ```
/// use cluestory_error::HttpError;
///
/// let err = HttpError::new("https://api.openai.com/v1/chat/completions", "TLS backend unavailable");
/// assert!(format!("{}", err).contains("api.openai.com"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: client for {} unavailable: {} at line {} in {}", endpoint, message, line, file)]
pub struct HttpError {
    /// Endpoint the client was being built for
    pub endpoint: String,
    /// Reason reported by the HTTP stack
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create an error for `endpoint` at the caller's location.
    #[track_caller]
    pub fn new(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            endpoint: endpoint.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
