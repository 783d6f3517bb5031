//! Story document encoding errors.

/// A story or request document could not be encoded or decoded.
///
/// Puzzle payloads from the model are not reported here; those are
/// [`crate::StoryErrorKind::MalformedPuzzleResponse`].
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error in {}: {} at line {} in {}", document, message, line, file)]
pub struct JsonError {
    /// Which document failed, e.g. a file path
    pub document: String,
    /// Decoder or encoder message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create an error for `document` at the caller's location.
    #[track_caller]
    pub fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: document.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
