//! Top-level error wrapper types.

use crate::{BuilderError, CompletionError, ConfigError, HttpError, JsonError, StoryError};

/// Every error the pipeline can surface to a caller.
///
/// # Examples
///
/// ```
/// use cluestory_error::{ClueStoryError, ConfigError};
///
/// let err: ClueStoryError = ConfigError::new("bad endpoint").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ClueStoryErrorKind {
    /// HTTP client construction error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Completion endpoint error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Story parsing or validation error
    #[from(StoryError)]
    Story(StoryError),
}

/// ClueStory error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("ClueStory Error: {}", _0)]
pub struct ClueStoryError(Box<ClueStoryErrorKind>);

impl ClueStoryError {
    /// Create a new error from a kind.
    pub fn new(kind: ClueStoryErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ClueStoryErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ClueStoryErrorKind
impl<T> From<T> for ClueStoryError
where
    T: Into<ClueStoryErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for ClueStory operations.
pub type ClueStoryResult<T> = std::result::Result<T, ClueStoryError>;
