//! Errors raised by the binding layer itself.

/// Binding layer error with source location.
///
/// Used when the binding code, rather than the native library, detects a
/// problem, such as an error chain it cannot safely walk.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Binding Error: {} at line {} in {}", message, line, file)]
pub struct BindingError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BindingError {
    /// Create a new BindingError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use svnhl_error::BindingError;
    ///
    /// let err = BindingError::new("Error chain too deep");
    /// assert!(err.message.contains("too deep"));
    /// assert!(err.file.ends_with(".rs"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
