//! The raw `svn_error_t` boundary.

use crate::{SvnErrorRecord, Translator};
use std::ffi::{CStr, c_char, c_int, c_long, c_void};
use svnhl_error::SubversionResult;

/// Layout-compatible mirror of Subversion's `svn_error_t`.
#[repr(C)]
#[allow(non_camel_case_types)]
#[derive(Debug)]
pub struct svn_error_t {
    /// APR or Subversion error code
    pub apr_err: c_int,
    /// Details from the producer of the error, or null
    pub message: *const c_char,
    /// The wrapped error, or null
    pub child: *mut svn_error_t,
    /// Pool the error was allocated in
    pub pool: *mut c_void,
    /// Source file that created the error, or null
    pub file: *const c_char,
    /// Source line that created the error
    pub line: c_long,
}

/// Copy a nullable C string.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn owned_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(ptr) };
    Some(text.to_string_lossy().into_owned())
}

impl Translator {
    /// Copy a raw error chain into an owned record.
    ///
    /// Returns `Ok(None)` for a null pointer (`SVN_NO_ERROR`). The chain is
    /// only read; freeing it remains the caller's job.
    ///
    /// # Errors
    ///
    /// Returns a binding error if the chain has more than
    /// `max_chain_depth` links, which also stops cyclic chains.
    ///
    /// # Safety
    ///
    /// `err` must be null or point to a valid `svn_error_t` whose `message`
    /// and `file` are null or NUL-terminated, and whose `child` pointers
    /// satisfy the same requirements, for the duration of the call.
    pub unsafe fn record_from_raw(
        &self,
        err: *const svn_error_t,
    ) -> SubversionResult<Option<SvnErrorRecord>> {
        let mut links = Vec::new();
        let mut cursor = err;
        while !cursor.is_null() {
            self.ensure_depth(links.len() + 1)?;
            let link = unsafe { &*cursor };
            links.push(link);
            cursor = link.child.cast_const();
        }

        let mut record: Option<SvnErrorRecord> = None;
        for link in links.into_iter().rev() {
            let mut builder = SvnErrorRecord::builder();
            builder.apr_err(link.apr_err).line(i64::from(link.line));
            if let Some(message) = unsafe { owned_string(link.message) } {
                builder.message(message);
            }
            if let Some(file) = unsafe { owned_string(link.file) } {
                builder.file(file);
            }
            if let Some(child) = record.take() {
                builder.child(child);
            }
            record = Some(builder.build()?);
        }

        tracing::debug!(found = record.is_some(), "Copied raw error chain");
        Ok(record)
    }

    /// Turn the result of a native call into a `SubversionResult`.
    ///
    /// # Errors
    ///
    /// Returns the translated native error when `err` is not null, or a
    /// binding error if the chain cannot be walked.
    ///
    /// # Safety
    ///
    /// Same requirements as [`Translator::record_from_raw`].
    pub unsafe fn check(&self, err: *const svn_error_t) -> SubversionResult<()> {
        match unsafe { self.record_from_raw(err) }? {
            None => Ok(()),
            Some(record) => Err(self.translate(&record)?.into()),
        }
    }
}

impl SvnErrorRecord {
    /// Copy a raw error chain with the default depth limit.
    ///
    /// # Errors
    ///
    /// See [`Translator::record_from_raw`].
    ///
    /// # Safety
    ///
    /// See [`Translator::record_from_raw`].
    pub unsafe fn from_raw(err: *const svn_error_t) -> SubversionResult<Option<Self>> {
        unsafe { Translator::default().record_from_raw(err) }
    }
}

/// Check the result of a native call with the default translator.
///
/// # Errors
///
/// See [`Translator::check`].
///
/// # Safety
///
/// See [`Translator::record_from_raw`].
pub unsafe fn check(err: *const svn_error_t) -> SubversionResult<()> {
    unsafe { Translator::default().check(err) }
}
