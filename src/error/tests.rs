use super::*;
use wildcard::Prepared;

fn logged(err: &Error, use_colors: bool) -> String {
    let mut buf = Vec::new();
    err.log_to(&mut buf, use_colors).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_log() {
    let err = Error::Io(io::Error::other("test"));
    assert_eq!(logged(&err, false), "error: test\n");

    let err = Error::InputTooLong {
        what: "text",
        len: 5,
        limit: 4,
    };
    assert_eq!(
        logged(&err, false),
        "error: text is 5 bytes long, which exceeds the limit of 4 bytes\n"
    );
}

#[test]
fn test_log_colored() {
    let err = Error::UnexpectedEof { what: "pattern" };
    let text = logged(&err, true);
    assert!(text.contains("\x1b["));
    assert!(text.ends_with("no pattern provided, input ended\n"));
}

#[test]
fn test_log_rejected() {
    let source = Prepared::new("abc", "a\\x\\").unwrap_err();
    let err = Error::Rejected { what: "pattern", source };
    assert_eq!(
        logged(&err, false),
        "error: invalid pattern\n  \
         - Error at position 2: Undefined escape sequence '\\x'\n  \
         - Error at position 4: Trailing backslash has no character to escape\n"
    );
}

#[test]
fn test_wildcard_in_text() {
    let err = Error::WildcardInText { ch: '*', position: 3 };
    assert_eq!(
        err.to_string(),
        "the text string cannot contain wildcard characters, found '*' at position 3"
    );
}
