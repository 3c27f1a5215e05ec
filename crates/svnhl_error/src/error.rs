//! Top-level error wrapper types.

use crate::{APR_ERR_NONE, BindingError, NativeError};

/// The kinds of error the binding layer can surface.
///
/// # Examples
///
/// ```
/// use svnhl_error::{NativeError, SubversionErrorKind};
///
/// let kind: SubversionErrorKind = NativeError::from_message("boom").into();
/// assert_eq!(format!("{}", kind), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SubversionErrorKind {
    /// Error reported by the native Subversion libraries
    #[from(NativeError)]
    Native(NativeError),
    /// Error detected by the binding layer
    #[from(BindingError)]
    Binding(BindingError),
}

/// Subversion error with kind discrimination.
///
/// # Examples
///
/// ```
/// use svnhl_error::{NativeError, SubversionResult};
///
/// fn update() -> SubversionResult<()> {
///     Err(NativeError::new("Path is not a working copy", Some("wc.c:7"), 155007))?
/// }
///
/// let err = update().unwrap_err();
/// assert_eq!(err.apr_err(), Some(155007));
/// assert_eq!(
///     format!("{}", err),
///     "Subversion Error: Path is not a working copysvn: wc.c:7: (apr_err=155007)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
#[display("Subversion Error: {}", _0)]
pub struct SubversionError(Box<SubversionErrorKind>);

impl SubversionError {
    /// Create a new error from a kind.
    pub fn new(kind: SubversionErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SubversionErrorKind {
        &self.0
    }

    /// The native error, if this error came from the native libraries.
    pub fn as_native(&self) -> Option<&NativeError> {
        match self.kind() {
            SubversionErrorKind::Native(e) => Some(e),
            SubversionErrorKind::Binding(_) => None,
        }
    }

    /// The APR error code, if a native one applies.
    pub fn apr_err(&self) -> Option<i32> {
        self.as_native()
            .map(NativeError::apr_err)
            .filter(|code| *code != APR_ERR_NONE)
    }
}

// Generic From implementation for any type that converts to SubversionErrorKind
impl<T> From<T> for SubversionError
where
    T: Into<SubversionErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for binding operations.
pub type SubversionResult<T> = std::result::Result<T, SubversionError>;
