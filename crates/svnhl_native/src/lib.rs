//! Native error translation for the svnhl Subversion binding layer.
//!
//! A failing Subversion C call returns an `svn_error_t` chain. This crate
//! copies that chain into an owned [`SvnErrorRecord`], assembles one message
//! from all of its links and produces a [`svnhl_error::NativeError`] carrying
//! the message, the `file:line` source of the outermost link and its APR
//! error code.
//!
//! # Examples
//!
//! ```
//! use svnhl_native::{SvnErrorRecord, Translator, TranslatorConfig};
//!
//! let record = SvnErrorRecord::builder()
//!     .apr_err(170000)
//!     .message("Illegal repository URL 'htp://x'")
//!     .file("ra_loader.c")
//!     .line(310)
//!     .build()
//!     .unwrap();
//!
//! let quiet = Translator::new(TranslatorConfig::default().with_include_source(false));
//! let err = quiet.translate(&record).unwrap();
//! assert_eq!(
//!     err.formatted_message(),
//!     "Bad URL passed to RA layer\nsvn: Illegal repository URL 'htp://x'\n"
//! );
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[allow(unsafe_code)]
mod ffi;
mod message;
mod record;
mod translate;

pub use ffi::{check, svn_error_t};
pub use message::{APR_SUCCESS, assemble_message, generic_description};
pub use record::{SvnErrorRecord, SvnErrorRecordBuilder};
pub use translate::{Translator, TranslatorConfig, TranslatorConfigBuilder};
