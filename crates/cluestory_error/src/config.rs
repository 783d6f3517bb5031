//! Configuration and environment errors.

/// Configuration could not be loaded, or a required setting is absent.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong with the configuration
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create an error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A required environment variable is unset or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluestory_error::ConfigError;
    ///
    /// let err = ConfigError::missing_env("OPENAI_API_KEY");
    /// assert_eq!(err.message, "OPENAI_API_KEY environment variable not set");
    /// ```
    #[track_caller]
    pub fn missing_env(var: &str) -> Self {
        Self::new(format!("{} environment variable not set", var))
    }
}
