use rstest::rstest;
use strum::IntoEnumIterator;

use super::*;

#[test]
fn test_accepts_ascii() {
    assert!(validate_raw("").is_empty());
    assert!(validate_raw("a_valid-string.123?*").is_empty());
    assert!(validate_raw("\x7f").is_empty());
}

#[test]
fn test_detects_multibyte_character() {
    let issues = validate_raw("abc©def");
    assert_eq!(
        issues,
        vec![Issue {
            kind: IssueType::Error,
            code: IssueCode::MultibyteCharacterNotAllowed,
            message: "Error at position 4: Multi-byte characters are not allowed".into(),
        }]
    );
}

#[test]
fn test_reports_only_first_multibyte_character() {
    let issues = validate_raw("🦀a©");
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("position 1"));
}

#[rstest]
#[case(ParseEvent::new(IssueCode::ConsecutiveAsterisksMerged, 3), IssueType::Warning, "Warning at position 3: Consecutive asterisks merged into one")]
#[case(ParseEvent::new(IssueCode::TrailingBackslash, 5), IssueType::Error, "Error at position 5: Trailing backslash has no character to escape")]
#[case(ParseEvent::new(IssueCode::UndefinedEscapeSequence, 2).with_detail("x"), IssueType::Error, r"Error at position 2: Undefined escape sequence '\x'")]
#[case(ParseEvent::new(IssueCode::MultibyteCharacterNotAllowed, 7), IssueType::Error, "Error at position 7: Multi-byte characters are not allowed")]
fn test_event_to_issue(#[case] event: ParseEvent, #[case] kind: IssueType, #[case] message: &str) {
    let issues = validate_events(std::slice::from_ref(&event));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, event.code);
    assert_eq!(issues[0].kind, kind);
    assert_eq!(issues[0].message, message);
    assert_eq!(issues[0].to_string(), message);
}

#[test]
fn test_preserves_event_order() {
    let events = vec![
        ParseEvent::new(IssueCode::ConsecutiveAsterisksMerged, 3),
        ParseEvent::new(IssueCode::TrailingBackslash, 6),
        ParseEvent::new(IssueCode::ConsecutiveAsterisksMerged, 1),
    ];
    let issues = validate_events(&events);
    let codes: Vec<_> = issues.iter().map(|issue| issue.code).collect();
    assert_eq!(
        codes,
        vec![
            IssueCode::ConsecutiveAsterisksMerged,
            IssueCode::TrailingBackslash,
            IssueCode::ConsecutiveAsterisksMerged,
        ]
    );
    assert!(has_errors(&issues));
}

#[test]
fn test_warnings_do_not_block() {
    let issues = validate_events(&[ParseEvent::new(IssueCode::ConsecutiveAsterisksMerged, 2)]);
    assert!(!issues[0].is_error());
    assert!(!has_errors(&issues));
    assert!(!has_errors(&[]));
}

#[test]
fn test_only_merge_is_a_warning() {
    for code in IssueCode::iter() {
        let expected = match code {
            IssueCode::ConsecutiveAsterisksMerged => IssueType::Warning,
            _ => IssueType::Error,
        };
        assert_eq!(code.issue_type(), expected, "{}", code);
    }
}

#[test]
fn test_display_names() {
    assert_eq!(IssueType::Warning.to_string(), "Warning");
    assert_eq!(IssueType::Error.to_string(), "Error");
    assert_eq!(IssueCode::TrailingBackslash.to_string(), "TrailingBackslash");
}
