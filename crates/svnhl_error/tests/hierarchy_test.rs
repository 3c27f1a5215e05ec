use svnhl_error::{
    BindingError, Describe, NativeError, SubversionError, SubversionErrorKind, SubversionResult,
};

fn failing_native() -> SubversionResult<()> {
    Err(NativeError::new("boom", Some("file.c:42"), 5))?
}

fn failing_binding() -> SubversionResult<()> {
    Err(BindingError::new("chain too deep"))?
}

#[test]
fn native_errors_convert_with_question_mark() {
    let err = failing_native().unwrap_err();
    assert!(matches!(err.kind(), SubversionErrorKind::Native(_)));
    assert_eq!(err.description(), "boomsvn: file.c:42: (apr_err=5)");
    assert_eq!(
        err.to_string(),
        "Subversion Error: boomsvn: file.c:42: (apr_err=5)"
    );
}

#[test]
fn native_accessors_through_wrapper() {
    let err = failing_native().unwrap_err();
    let native = err.as_native().unwrap();
    assert_eq!(native.source_location(), Some("file.c:42"));
    assert_eq!(err.apr_err(), Some(5));
}

#[test]
fn no_code_reported_for_none_sentinel() {
    let err = SubversionError::from(NativeError::new("boom", Some("f.c:1"), -1));
    assert_eq!(err.apr_err(), None);
}

#[test]
fn binding_errors_carry_location() {
    let err = failing_binding().unwrap_err();
    assert!(err.as_native().is_none());
    assert_eq!(err.apr_err(), None);
    match err.kind() {
        SubversionErrorKind::Binding(e) => {
            assert_eq!(e.message, "chain too deep");
            assert!(e.file.ends_with("hierarchy_test.rs"));
            assert!(e.line > 0);
        }
        other => panic!("unexpected kind: {:?}", other),
    }
    assert!(err.description().starts_with("Binding Error: chain too deep at line"));
}

#[test]
fn kinds_compare_by_value() {
    let a = SubversionError::from(NativeError::from_message("x"));
    let b = SubversionError::new(SubversionErrorKind::Native(NativeError::from_message("x")));
    assert_eq!(a, b);
}
