use std::fmt;

use strum::{AsRefStr, EnumIter};

use crate::compiler::ParseEvent;

// ---

/// Categorizes an issue as either a non-fatal warning or a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum IssueType {
    Warning,
    Error,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

// ---

/// Machine-readable code of every validation and parsing issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum IssueCode {
    MultibyteCharacterNotAllowed,
    UndefinedEscapeSequence,
    TrailingBackslash,
    ConsecutiveAsterisksMerged,
}

impl IssueCode {
    pub fn issue_type(self) -> IssueType {
        match self {
            Self::MultibyteCharacterNotAllowed => IssueType::Error,
            Self::UndefinedEscapeSequence => IssueType::Error,
            Self::TrailingBackslash => IssueType::Error,
            Self::ConsecutiveAsterisksMerged => IssueType::Warning,
        }
    }

    fn describe(self, detail: Option<&str>) -> String {
        match self {
            Self::MultibyteCharacterNotAllowed => "Multi-byte characters are not allowed".into(),
            Self::UndefinedEscapeSequence => format!("Undefined escape sequence '\\{}'", detail.unwrap_or_default()),
            Self::TrailingBackslash => "Trailing backslash has no character to escape".into(),
            Self::ConsecutiveAsterisksMerged => "Consecutive asterisks merged into one".into(),
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

// ---

/// A classified diagnostic derived from a parse event or a raw string scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueType,
    pub code: IssueCode,
    /// `"<Type> at position <n>: <text>"`
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, position: usize, detail: Option<&str>) -> Self {
        let kind = code.issue_type();
        Self {
            kind,
            code,
            message: format!("{} at position {}: {}", kind, position, code.describe(detail)),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == IssueType::Error
    }
}

impl From<&ParseEvent> for Issue {
    fn from(event: &ParseEvent) -> Self {
        Self::new(event.code, event.position, event.detail.as_deref())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ---

/// Scans a raw string for bytes outside of the ASCII range.
///
/// Stops at the first offending byte, so at most one issue is returned.
///
/// ```
/// use wildcard::{IssueCode, validate_raw};
///
/// assert!(validate_raw("a_valid-string.123?*").is_empty());
///
/// let issues = validate_raw("abc©def");
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues[0].code, IssueCode::MultibyteCharacterNotAllowed);
/// assert!(issues[0].message.contains("position 4"));
/// ```
pub fn validate_raw(text: &str) -> Vec<Issue> {
    text.bytes()
        .position(|b| b > 127)
        .map(|i| Issue::new(IssueCode::MultibyteCharacterNotAllowed, i + 1, None))
        .into_iter()
        .collect()
}

/// Maps each parse event to an issue, preserving order.
pub fn validate_events(events: &[ParseEvent]) -> Vec<Issue> {
    events.iter().map(Issue::from).collect()
}

/// Reports whether any of the issues blocks matching.
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(Issue::is_error)
}

#[cfg(test)]
mod tests;
