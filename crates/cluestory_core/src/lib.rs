//! Core data types for the ClueStory story generation pipeline.
//!
//! This crate provides the data model shared by every other ClueStory crate:
//! children and their grade/difficulty, generation parameters, the stitched
//! story document, and the chat-completion request shape.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod child;
mod credential;
mod grade;
mod message;
mod params;
mod request;
mod role;
mod status;
mod story;
mod subject;

pub use child::{Child, validate_aliases};
pub use credential::ApiKey;
pub use grade::{DifficultyLevel, Grade};
pub use message::ChatMessage;
pub use params::{GenerationParams, GenerationSettings, MAX_KIDS, MAX_QUESTIONS_PER_KID};
pub use request::{CompletionOptions, CompletionRequest, CompletionRequestBuilder};
pub use role::Role;
pub use status::{GenerationPhase, GenerationStatus};
pub use story::{GeneratedStory, ProblemContent, PuzzleItem, Story, StoryStage};
pub use subject::{StoryMode, Subject};
