//! Assembly of a single message from a Subversion error chain.

use crate::SvnErrorRecord;

/// The code reported by a successful APR call.
pub const APR_SUCCESS: i32 = 0;

/// Subversion's stock text for a well-known error code.
///
/// # Examples
///
/// ```
/// use svnhl_native::generic_description;
///
/// assert_eq!(generic_description(215004), Some("Authentication failed"));
/// assert_eq!(generic_description(42), None);
/// ```
pub fn generic_description(code: i32) -> Option<&'static str> {
    let text = match code {
        150000 => "Can't find an entry",
        155007 => "Path is not a working copy directory",
        160013 => "Filesystem has no item",
        170000 => "Bad URL passed to RA layer",
        200000 => "A problem occurred; see other errors for details",
        200007 => "Trying to use an unsupported feature",
        200009 => "Illegal target for the requested operation",
        200015 => "The operation was interrupted",
        215004 => "Authentication failed",
        _ => return None,
    };
    Some(text)
}

/// Build the message for a whole chain, outermost link first.
///
/// Each link contributes the generic text for its code when the code differs
/// from the previous link's, followed by `svn: <message>` when it has a
/// message. Every contribution ends with a newline.
///
/// # Examples
///
/// ```
/// use svnhl_native::{SvnErrorRecord, assemble_message};
///
/// let record = SvnErrorRecord::builder()
///     .apr_err(215004)
///     .message("No more credentials")
///     .build()
///     .unwrap();
/// assert_eq!(
///     assemble_message(&record),
///     "Authentication failed\nsvn: No more credentials\n"
/// );
/// ```
pub fn assemble_message(record: &SvnErrorRecord) -> String {
    let mut buffer = String::new();
    let mut parent_code = APR_SUCCESS;

    for link in record.chain() {
        let code = *link.apr_err();
        if code != parent_code {
            if let Some(generic) = generic_description(code) {
                buffer.push_str(generic);
                buffer.push('\n');
            }
        }
        if let Some(message) = link.message() {
            buffer.push_str("svn: ");
            buffer.push_str(message);
            buffer.push('\n');
        }
        parent_code = code;
    }

    buffer
}
