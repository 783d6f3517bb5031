//! Generation run phases and the caller-facing status projection.

use crate::Story;
use cluestory_error::ClueStoryResult;
use serde::Serialize;

/// Phases of one generation run.
///
/// `Failed` can be entered from any phase; no partial story survives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize)]
pub enum GenerationPhase {
    /// Nothing requested yet
    Idle,
    /// Narrative call in flight
    RequestingNarrative,
    /// Per-child puzzle calls in flight
    RequestingPuzzles,
    /// Decoding raw completions
    Parsing,
    /// Merging stages with puzzles
    Stitching,
    /// Story produced
    Complete,
    /// Run aborted
    Failed,
}

impl GenerationPhase {
    /// True for `Complete` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Complete | GenerationPhase::Failed)
    }
}

/// What a UI shows about a generation call: a value, not shared flags.
///
/// # Examples
///
/// ```
/// use cluestory_core::GenerationStatus;
/// use cluestory_error::{ClueStoryResult, StoryError, StoryErrorKind};
///
/// let failed: ClueStoryResult<_> = Err(StoryError::new(StoryErrorKind::NoChildren).into());
/// let status = GenerationStatus::from_result(failed);
/// assert!(status.error_message().unwrap().contains("At least one child"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum GenerationStatus {
    /// Call in flight
    Pending,
    /// Call produced a story
    Success(Box<Story>),
    /// Call failed with a human-readable message
    Error(String),
}

impl GenerationStatus {
    /// Project a finished call onto a status.
    pub fn from_result(result: ClueStoryResult<Story>) -> Self {
        match result {
            Ok(story) => GenerationStatus::Success(Box::new(story)),
            Err(e) => GenerationStatus::Error(e.to_string()),
        }
    }

    /// The story, when successful.
    pub fn story(&self) -> Option<&Story> {
        match self {
            GenerationStatus::Success(story) => Some(story),
            _ => None,
        }
    }

    /// The message, when failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}
