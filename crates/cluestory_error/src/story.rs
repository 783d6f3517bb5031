//! Story generation errors: malformed model output and invalid parameters.

/// Specific error conditions for story generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoryErrorKind {
    /// Puzzle payload was not valid JSON or lacked the `problems` array
    #[display("Malformed puzzle response for '{}': {}", alias, message)]
    MalformedPuzzleResponse {
        /// Alias of the child the puzzles were requested for
        alias: String,
        /// Decoder message
        message: String,
    },
    /// A generation run needs at least one child
    #[display("At least one child is required")]
    NoChildren,
    /// Too many children for one run
    #[display("At most {} children are allowed, got {}", max, actual)]
    TooManyChildren {
        /// Upper bound
        max: usize,
        /// Supplied count
        actual: usize,
    },
    /// Stage count outside the supported range
    #[display("questions_per_kid must be between 1 and {}, got {}", max, actual)]
    QuestionsPerKidOutOfRange {
        /// Upper bound
        max: u32,
        /// Supplied value
        actual: u32,
    },
    /// Two children share an alias under case-insensitive comparison
    #[display("Alias '{}' is used by more than one child", _0)]
    DuplicateAlias(String),
    /// Grade is not `K` or 1-12
    #[display("Invalid grade '{}': expected K or 1-12", _0)]
    InvalidGrade(String),
    /// Difficulty is not 1-5
    #[display("Invalid difficulty level {}: expected 1-5", _0)]
    InvalidDifficulty(u8),
    /// A required text field is blank
    #[display("Field '{}' must not be empty", _0)]
    EmptyField(String),
}

/// Error type for story generation.
///
/// # Examples
///
/// ```
/// use cluestory_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::NoChildren);
/// assert!(format!("{}", err).contains("At least one child"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
