//! Errors translated from the native Subversion libraries.

use std::fmt;

/// Code value meaning "no APR error code applies".
pub const APR_ERR_NONE: i32 = -1;

/// Marker placed between the message and the error source.
const SOURCE_MARKER: &str = "svn: ";

/// An error raised by the native Subversion libraries, translated into an
/// owned value.
///
/// Holds the description of the failure, the origin of the wrapped
/// `svn_error_t` (typically `file:line`) and its APR error code. All fields
/// are fixed at construction.
///
/// # Examples
///
/// ```
/// use svnhl_error::NativeError;
///
/// let err = NativeError::new("boom", Some("file.c:42"), 5);
/// assert_eq!(err.formatted_message(), "boomsvn: file.c:42: (apr_err=5)");
/// assert_eq!(err.source_location(), Some("file.c:42"));
/// assert_eq!(err.apr_err(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Error)]
pub struct NativeError {
    message: String,
    source_location: Option<String>,
    apr_err: i32,
}

impl NativeError {
    /// Create a native error. Any values are accepted, including an empty
    /// message, a missing source, or [`APR_ERR_NONE`].
    pub fn new(
        message: impl Into<String>,
        source: Option<impl Into<String>>,
        apr_err: i32,
    ) -> Self {
        Self {
            message: message.into(),
            source_location: source.map(Into::into),
            apr_err,
        }
    }

    /// Create a native error without a source or code.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(message, None::<String>, APR_ERR_NONE)
    }

    /// The base message, without source or code.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error source (e.g. file name and line number), if any.
    pub fn source_location(&self) -> Option<&str> {
        self.source_location.as_deref()
    }

    /// The APR error code of the wrapped error, or [`APR_ERR_NONE`].
    pub fn apr_err(&self) -> i32 {
        self.apr_err
    }

    /// The message with the source and APR code appended, if any.
    ///
    /// The code is only rendered when a source is present and the code is
    /// not [`APR_ERR_NONE`].
    pub fn formatted_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(source) = &self.source_location {
            f.write_str(SOURCE_MARKER)?;
            f.write_str(source)?;
            if self.apr_err != APR_ERR_NONE {
                write!(f, ": (apr_err={})", self.apr_err)?;
            }
        }
        Ok(())
    }
}
