//! Translation of error chains into [`NativeError`] values.

use crate::{SvnErrorRecord, assemble_message};
use serde::{Deserialize, Serialize};
use svnhl_error::{BindingError, NativeError, SubversionResult};

/// Configuration for error chain translation.
///
/// # Examples
///
/// ```
/// use svnhl_native::TranslatorConfig;
///
/// let config = TranslatorConfig::default().with_include_source(false);
/// assert!(!*config.include_source());
/// assert_eq!(*config.max_chain_depth(), 64);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct TranslatorConfig {
    /// Attach `file:line` of the outermost link as the error source
    #[serde(default = "default_include_source")]
    include_source: bool,

    /// Longest chain accepted before translation is refused
    #[serde(default = "default_max_chain_depth")]
    max_chain_depth: usize,
}

fn default_include_source() -> bool {
    true
}

fn default_max_chain_depth() -> usize {
    64
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            include_source: default_include_source(),
            max_chain_depth: default_max_chain_depth(),
        }
    }
}

impl TranslatorConfig {
    /// Creates a new config builder.
    pub fn builder() -> TranslatorConfigBuilder {
        TranslatorConfigBuilder::default()
    }
}

/// Translates Subversion error chains into [`NativeError`] values.
///
/// # Examples
///
/// ```
/// use svnhl_native::{SvnErrorRecord, Translator};
///
/// let record = SvnErrorRecord::builder()
///     .apr_err(155007)
///     .message("'/tmp/x' is not a working copy")
///     .file("wc_db.c")
///     .line(42)
///     .build()
///     .unwrap();
///
/// let err = Translator::default().translate(&record).unwrap();
/// assert_eq!(
///     err.formatted_message(),
///     "Path is not a working copy directory\nsvn: '/tmp/x' is not a working copy\n\
///      svn: wc_db.c:42: (apr_err=155007)"
/// );
/// ```
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    /// Create a translator with configuration.
    pub fn new(config: TranslatorConfig) -> Self {
        tracing::debug!(
            include_source = config.include_source,
            max_chain_depth = config.max_chain_depth,
            "Creating new Translator"
        );
        Self { config }
    }

    /// Translate a chain into a native error.
    ///
    /// The message is assembled from every link, the source is taken from
    /// the outermost link and so is the APR code.
    ///
    /// # Errors
    ///
    /// Returns a binding error if the chain is longer than
    /// `max_chain_depth`.
    #[tracing::instrument(skip(self, record), fields(apr_err = *record.apr_err(), depth = tracing::field::Empty))]
    pub fn translate(&self, record: &SvnErrorRecord) -> SubversionResult<NativeError> {
        let depth = record.depth();
        tracing::Span::current().record("depth", depth);
        self.ensure_depth(depth)?;

        let err = self.native_error(record);
        tracing::debug!(source = ?err.source_location(), "Translated error chain");
        Ok(err)
    }

    #[track_caller]
    pub(crate) fn ensure_depth(&self, depth: usize) -> SubversionResult<()> {
        if depth > self.config.max_chain_depth {
            tracing::warn!(
                depth,
                max_chain_depth = self.config.max_chain_depth,
                "Error chain exceeds maximum depth"
            );
            return Err(BindingError::new(format!(
                "Error chain has more than {} links",
                self.config.max_chain_depth
            ))
            .into());
        }
        Ok(())
    }

    fn native_error(&self, record: &SvnErrorRecord) -> NativeError {
        let source = if self.config.include_source {
            source_of(record)
        } else {
            None
        };
        NativeError::new(assemble_message(record), source, *record.apr_err())
    }
}

/// `file:line` of a link, or just `file` when the line is unknown.
fn source_of(record: &SvnErrorRecord) -> Option<String> {
    let file = record.file().as_deref()?;
    if *record.line() > 0 {
        Some(format!("{}:{}", file, record.line()))
    } else {
        Some(file.to_string())
    }
}

impl From<&SvnErrorRecord> for NativeError {
    fn from(record: &SvnErrorRecord) -> Self {
        Translator::default().native_error(record)
    }
}
