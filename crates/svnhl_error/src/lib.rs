//! Error types for the svnhl Subversion binding layer.
//!
//! Errors coming out of the native Subversion libraries are translated into
//! [`NativeError`] values; errors detected by the binding code itself are
//! [`BindingError`]s. Both are variants of [`SubversionErrorKind`], wrapped
//! by [`SubversionError`].
//!
//! # Examples
//!
//! ```
//! use svnhl_error::{Describe, NativeError, SubversionResult};
//!
//! fn commit() -> SubversionResult<()> {
//!     Err(NativeError::new("Commit failed\n", Some("commit.c:120"), 160013))?
//! }
//!
//! match commit() {
//!     Ok(()) => println!("Committed"),
//!     Err(e) => eprintln!("{}", e.description()),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod binding;
mod describe;
mod error;
mod native;

pub use binding::BindingError;
pub use describe::Describe;
pub use error::{SubversionError, SubversionErrorKind, SubversionResult};
pub use native::{APR_ERR_NONE, NativeError};
