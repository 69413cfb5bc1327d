use super::*;
use crate::issue::IssueCode;

#[test]
fn test_clean_input() {
    let prepared = Prepared::new("mississippi", "m*iss*pi").unwrap();
    assert_eq!(prepared.text(), "mississippi");
    assert_eq!(prepared.compiled().tokens.len(), 5);
    assert!(prepared.warnings().is_empty());
    for strategy in Strategy::all() {
        assert!(prepared.profile(strategy).matched, "{}", strategy);
    }
}

#[test]
fn test_warnings_do_not_block() {
    let prepared = Prepared::new("aXb", "a***b").unwrap();
    assert_eq!(prepared.warnings().len(), 2);
    assert!(prepared.warnings().iter().all(|w| !w.is_error()));
    assert!(prepared.profile(Strategy::Memo).matched);
}

#[test]
fn test_rejects_multibyte_text() {
    let rejected = Prepared::new("añb", "*").unwrap_err();
    assert_eq!(rejected.issues.len(), 1);
    assert_eq!(rejected.issues[0].code, IssueCode::MultibyteCharacterNotAllowed);
    assert!(rejected.issues[0].message.contains("position 2"));
}

#[test]
fn test_rejects_multibyte_pattern_before_compiling() {
    let rejected = Prepared::new("ab", r"a\é").unwrap_err();
    assert_eq!(rejected.issues.len(), 1);
    assert_eq!(rejected.issues[0].code, IssueCode::MultibyteCharacterNotAllowed);
    assert!(rejected.issues[0].message.contains("position 3"));
}

#[test]
fn test_rejects_pattern_errors_with_all_issues() {
    let rejected = Prepared::new("abc", r"a**\q\").unwrap_err();
    let codes: Vec<_> = rejected.issues.iter().map(|i| i.code).collect();
    assert_eq!(
        codes,
        vec![
            IssueCode::ConsecutiveAsterisksMerged,
            IssueCode::UndefinedEscapeSequence,
            IssueCode::TrailingBackslash,
        ]
    );
    assert_eq!(
        rejected.to_string(),
        "Warning at position 3: Consecutive asterisks merged into one; \
         Error at position 4: Undefined escape sequence '\\q'; \
         Error at position 6: Trailing backslash has no character to escape"
    );
}
