//! Completion endpoint errors and retry classification.

/// Failure modes of a single completion request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// Network, DNS or timeout failure before a response arrived
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The endpoint answered with a non-success status
    #[display("API error (HTTP {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Provider message, or the raw body when no structured message exists
        message: String,
    },
    /// A success status without usable completion text
    #[display("Empty completion response: {}", _0)]
    EmptyResponse(String),
}

impl CompletionErrorKind {
    /// Check if this failure is worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            CompletionErrorKind::Transport(_) => true,
            CompletionErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            CompletionErrorKind::EmptyResponse(_) => false,
        }
    }
}

/// Completion error with source location tracking.
///
/// # Examples
///
/// ```
/// use cluestory_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::Api {
///     status: 401,
///     message: "Incorrect API key provided".to_string(),
/// });
/// assert!(format!("{}", err).contains("Incorrect API key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that can tell a caller whether a retry makes sense.
///
/// The pipeline itself never retries; this only classifies.
///
/// # Examples
///
/// ```
/// use cluestory_error::{CompletionError, CompletionErrorKind, RetryableError};
///
/// let rate_limited = CompletionError::new(CompletionErrorKind::Api {
///     status: 429,
///     message: "Rate limit reached".to_string(),
/// });
/// assert!(rate_limited.is_retryable());
///
/// let bad_key = CompletionError::new(CompletionErrorKind::Api {
///     status: 401,
///     message: "Invalid key".to_string(),
/// });
/// assert!(!bad_key.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error is transient.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for CompletionError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
