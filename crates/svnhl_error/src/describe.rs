//! The description capability shared by every error in the hierarchy.

use crate::{BindingError, NativeError, SubversionError, SubversionErrorKind};

/// Errors that can describe themselves for reporting and logging code.
///
/// # Examples
///
/// ```
/// use svnhl_error::{Describe, NativeError, SubversionError};
///
/// let native = NativeError::new("boom", Some("file.c:42"), -1);
/// let err = SubversionError::from(native.clone());
/// assert_eq!(err.description(), native.description());
/// assert_eq!(err.description(), "boomsvn: file.c:42");
/// ```
pub trait Describe {
    /// Full human-readable description of the error.
    fn description(&self) -> String;
}

impl Describe for NativeError {
    fn description(&self) -> String {
        self.formatted_message()
    }
}

impl Describe for BindingError {
    fn description(&self) -> String {
        self.to_string()
    }
}

impl Describe for SubversionErrorKind {
    fn description(&self) -> String {
        match self {
            SubversionErrorKind::Native(e) => e.description(),
            SubversionErrorKind::Binding(e) => e.description(),
        }
    }
}

impl Describe for SubversionError {
    fn description(&self) -> String {
        self.kind().description()
    }
}
