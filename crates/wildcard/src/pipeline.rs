use thiserror::Error;

use crate::compiler::{Compiled, compile};
use crate::issue::{Issue, has_errors, validate_events, validate_raw};
use crate::profile::{Profile, profile};
use crate::strategy::Strategy;

/// Input refused before any strategy ran, together with every issue found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .issues.iter().map(|issue| issue.message.as_str()).collect::<Vec<_>>().join("; "))]
pub struct Rejected {
    pub issues: Vec<Issue>,
}

/// A text and a pattern that passed validation and are ready for matching.
///
/// Validation runs in order: raw text bytes, raw pattern bytes, then the events of
/// compiling the pattern. Raw byte issues stop the pipeline before compiling.
/// Warnings are kept and do not block.
///
/// ```
/// use wildcard::{IssueCode, Prepared, Strategy};
///
/// let prepared = Prepared::new("abc", "a**c").unwrap();
/// assert_eq!(prepared.warnings()[0].code, IssueCode::ConsecutiveAsterisksMerged);
/// assert!(prepared.profile(Strategy::Greedy).matched);
///
/// let rejected = Prepared::new("abc", r"a\").unwrap_err();
/// assert_eq!(rejected.issues[0].code, IssueCode::TrailingBackslash);
/// ```
#[derive(Debug, Clone)]
pub struct Prepared<'a> {
    text: &'a str,
    compiled: Compiled,
    warnings: Vec<Issue>,
}

impl<'a> Prepared<'a> {
    pub fn new(text: &'a str, pattern: &str) -> Result<Self, Rejected> {
        let mut issues = validate_raw(text);
        issues.extend(validate_raw(pattern));
        if !issues.is_empty() {
            return Err(Rejected { issues });
        }

        let compiled = compile(pattern);
        let issues = validate_events(&compiled.events);
        if has_errors(&issues) {
            return Err(Rejected { issues });
        }

        Ok(Self {
            text,
            compiled,
            warnings: issues,
        })
    }

    pub fn text(&self) -> &str {
        self.text
    }

    pub fn compiled(&self) -> &Compiled {
        &self.compiled
    }

    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    pub fn profile(&self, strategy: Strategy) -> Profile {
        profile(strategy, self.text, &self.compiled.tokens)
    }
}

#[cfg(test)]
mod tests;
