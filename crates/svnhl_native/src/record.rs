//! Owned mirror of a native `svn_error_t` chain.

use svnhl_error::{BindingError, SubversionResult};

/// One link of a Subversion error chain, with its wrapped children.
///
/// # Examples
///
/// ```
/// use svnhl_native::SvnErrorRecord;
///
/// let inner = SvnErrorRecord::builder()
///     .apr_err(2)
///     .message("Can't open file 'a.txt'")
///     .build()
///     .unwrap();
/// let outer = SvnErrorRecord::builder()
///     .apr_err(200000)
///     .message("Update failed")
///     .file("update.c")
///     .line(88)
///     .child(inner)
///     .build()
///     .unwrap();
///
/// assert_eq!(outer.depth(), 2);
/// assert_eq!(*outer.line(), 88);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(build_fn(private, name = "build_internal"))]
pub struct SvnErrorRecord {
    /// APR or Subversion error code.
    #[builder(default)]
    apr_err: i32,
    /// Message attached to this link.
    #[builder(default, setter(into, strip_option))]
    message: Option<String>,
    /// Source file that raised this link.
    #[builder(default, setter(into, strip_option))]
    file: Option<String>,
    /// Source line that raised this link.
    #[builder(default)]
    line: i64,
    /// The wrapped, lower-level error.
    #[builder(default, setter(into, strip_option))]
    child: Option<Box<SvnErrorRecord>>,
}

impl SvnErrorRecordBuilder {
    /// Build the SvnErrorRecord.
    ///
    /// # Errors
    ///
    /// Returns a binding error if the builder is in an invalid state.
    #[track_caller]
    pub fn build(&self) -> SubversionResult<SvnErrorRecord> {
        Ok(self
            .build_internal()
            .map_err(|e| BindingError::new(e.to_string()))?)
    }
}

impl SvnErrorRecord {
    /// Creates a new record builder.
    pub fn builder() -> SvnErrorRecordBuilder {
        SvnErrorRecordBuilder::default()
    }

    /// Iterate over the chain, outermost link first.
    pub fn chain(&self) -> impl Iterator<Item = &SvnErrorRecord> {
        std::iter::successors(Some(self), |link| link.child.as_deref())
    }

    /// Number of links in the chain.
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// The innermost link, which is usually closest to the root cause.
    pub fn root_cause(&self) -> &SvnErrorRecord {
        self.chain().last().unwrap_or(self)
    }
}
