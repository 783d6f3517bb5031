//! Errors raised when a builder-constructed request is incomplete.

/// Why a builder refused to build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required setter was never called
    #[display("Missing required field: {}", _0)]
    MissingField(String),

    /// Fields were set but are inconsistent
    #[display("Validation failed: {}", _0)]
    ValidationFailed(String),
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use cluestory_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::from("messages must not be empty".to_string());
/// assert!(matches!(err.kind(), BuilderErrorKind::ValidationFailed(_)));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}

// derive_builder reports unset required fields through this type
impl From<derive_builder::UninitializedFieldError> for BuilderError {
    #[track_caller]
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::new(BuilderErrorKind::MissingField(err.field_name().to_string()))
    }
}

// Validation hooks return plain strings
impl From<String> for BuilderError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(BuilderErrorKind::ValidationFailed(msg))
    }
}
