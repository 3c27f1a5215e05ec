use std::ffi::CString;
use std::ptr;
use svnhl_error::{Describe, SubversionErrorKind};
use svnhl_native::{SvnErrorRecord, Translator, TranslatorConfig, check, svn_error_t};

fn raw_link(
    apr_err: i32,
    message: Option<&CString>,
    file: Option<&CString>,
    line: i32,
    child: *mut svn_error_t,
) -> svn_error_t {
    svn_error_t {
        apr_err,
        message: message.map_or(ptr::null(), |m| m.as_ptr()),
        child,
        pool: ptr::null_mut(),
        file: file.map_or(ptr::null(), |f| f.as_ptr()),
        line: line.into(),
    }
}

#[test]
fn null_pointer_is_success() {
    assert!(unsafe { check(ptr::null()) }.is_ok());
    assert_eq!(unsafe { SvnErrorRecord::from_raw(ptr::null()) }.unwrap(), None);
}

#[test]
fn raw_chain_matches_owned_record() {
    let inner_message = CString::new("Connection refused").unwrap();
    let outer_message = CString::new("Unable to connect to a repository").unwrap();
    let file = CString::new("ra_svn.c").unwrap();

    let mut inner = raw_link(111, Some(&inner_message), None, 0, ptr::null_mut());
    let outer = raw_link(170000, Some(&outer_message), Some(&file), 77, &mut inner);

    let copied = unsafe { SvnErrorRecord::from_raw(&outer) }.unwrap().unwrap();

    let expected = SvnErrorRecord::builder()
        .apr_err(170000)
        .message("Unable to connect to a repository")
        .file("ra_svn.c")
        .line(77)
        .child(
            SvnErrorRecord::builder()
                .apr_err(111)
                .message("Connection refused")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(copied, expected);
}

#[test]
fn check_surfaces_native_error() {
    let message = CString::new("Authorization failed").unwrap();
    let file = CString::new("auth.c").unwrap();
    let raw = raw_link(215004, Some(&message), Some(&file), 12, ptr::null_mut());

    let err = unsafe { check(&raw) }.unwrap_err();
    let native = err.as_native().unwrap();
    assert_eq!(native.source_location(), Some("auth.c:12"));
    assert_eq!(native.apr_err(), 215004);
    assert_eq!(
        err.description(),
        "Authentication failed\nsvn: Authorization failed\nsvn: auth.c:12: (apr_err=215004)"
    );
}

#[test]
fn invalid_utf8_is_copied_lossily() {
    let message = CString::new(vec![b'b', 0xff, b'd']).unwrap();
    let raw = raw_link(1, Some(&message), None, 0, ptr::null_mut());

    let record = unsafe { SvnErrorRecord::from_raw(&raw) }.unwrap().unwrap();
    assert_eq!(record.message().as_deref(), Some("b\u{fffd}d"));
}

#[test]
fn cyclic_chain_is_rejected() {
    let mut link = raw_link(1, None, None, 0, ptr::null_mut());
    let self_ptr: *mut svn_error_t = &mut link;
    unsafe { (*self_ptr).child = self_ptr };

    let translator = Translator::new(TranslatorConfig::default().with_max_chain_depth(4));
    let err = unsafe { translator.check(self_ptr) }.unwrap_err();
    assert!(matches!(err.kind(), SubversionErrorKind::Binding(_)));
}
