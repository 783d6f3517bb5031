//! Error types for the ClueStory generation pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cluestory_error::{ClueStoryResult, CompletionError, CompletionErrorKind};
//!
//! fn call_model() -> ClueStoryResult<String> {
//!     Err(CompletionError::new(CompletionErrorKind::Transport(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! assert!(call_model().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod completion;
mod config;
mod error;
mod http;
mod json;
mod story;

pub use builder::{BuilderError, BuilderErrorKind};
pub use completion::{CompletionError, CompletionErrorKind, RetryableError};
pub use config::ConfigError;
pub use error::{ClueStoryError, ClueStoryErrorKind, ClueStoryResult};
pub use http::HttpError;
pub use json::JsonError;
pub use story::{StoryError, StoryErrorKind};
