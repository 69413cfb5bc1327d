use std::fmt;
use std::mem::take;

use memchr::memchr3;

use crate::issue::IssueCode;
use crate::token::Token;

/// Raw information about something the compiler had to recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEvent {
    pub code: IssueCode,
    /// 1-based byte position in the raw pattern.
    pub position: usize,
    /// Extra context, e.g. the character following an undefined escape.
    pub detail: Option<String>,
}

impl ParseEvent {
    pub fn new(code: IssueCode, position: usize) -> Self {
        Self {
            code,
            position,
            detail: None,
        }
    }

    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..self
        }
    }
}

/// Result of compiling a pattern: the tokens and every event raised on the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compiled {
    pub tokens: Vec<Token>,
    pub events: Vec<ParseEvent>,
}

impl Compiled {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Renders the tokens back into a canonical pattern.
///
/// Merged asterisks stay merged, recovered escapes become plain literals
/// and a trailing backslash disappears.
///
/// ```
/// use wildcard::compile;
///
/// assert_eq!(compile(r"a**\nb\").to_string(), "a*nb");
/// assert_eq!(compile(r"file\*.txt").to_string(), r"file\*.txt");
/// ```
impl fmt::Display for Compiled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Compiles a raw pattern into tokens and parse events.
///
/// This function is infallible. Whether the collected events are fatal is
/// decided by [`validate_events`](crate::validate_events) and its caller.
///
/// # Examples
///
/// ```
/// use wildcard::{IssueCode, Token, compile};
///
/// let compiled = compile("a?*");
/// assert_eq!(
///     compiled.tokens,
///     vec![Token::Literal("a".into()), Token::AnyChar, Token::AnySequence]
/// );
/// assert!(compiled.events.is_empty());
///
/// let compiled = compile(r"abc\");
/// assert_eq!(compiled.tokens, vec![Token::Literal("abc".into())]);
/// assert_eq!(compiled.events[0].code, IssueCode::TrailingBackslash);
/// assert_eq!(compiled.events[0].position, 4);
/// ```
pub fn compile(pattern: &str) -> Compiled {
    let compiled = Compiler::new().compile(pattern);
    log::trace!(
        "compiled pattern {:?} into {} token(s) with {} event(s)",
        pattern,
        compiled.tokens.len(),
        compiled.events.len()
    );
    compiled
}

#[derive(Default)]
struct Compiler {
    tokens: Vec<Token>,
    events: Vec<ParseEvent>,
    literal: String,
}

impl Compiler {
    fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            self.tokens.push(Token::Literal(take(&mut self.literal)));
        }
    }

    fn compile(mut self, raw: &str) -> Compiled {
        let bytes = raw.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            // everything up to the next metacharacter is a plain literal run
            let Some(offset) = memchr3(b'*', b'?', b'\\', &bytes[i..]) else {
                self.literal.push_str(&raw[i..]);
                break;
            };
            self.literal.push_str(&raw[i..i + offset]);
            i += offset;

            let position = i + 1;
            match bytes[i] {
                b'?' => {
                    self.flush();
                    self.tokens.push(Token::AnyChar);
                    i += 1;
                }
                b'*' => {
                    self.flush();
                    if matches!(self.tokens.last(), Some(Token::AnySequence)) {
                        self.events
                            .push(ParseEvent::new(IssueCode::ConsecutiveAsterisksMerged, position));
                    } else {
                        self.tokens.push(Token::AnySequence);
                    }
                    i += 1;
                }
                _ => {
                    let Some(escaped) = raw[i + 1..].chars().next() else {
                        self.events.push(ParseEvent::new(IssueCode::TrailingBackslash, position));
                        i += 1;
                        continue;
                    };
                    if !matches!(escaped, '*' | '?' | '\\') {
                        self.events.push(
                            ParseEvent::new(IssueCode::UndefinedEscapeSequence, position).with_detail(escaped),
                        );
                    }
                    self.literal.push(escaped);
                    i += 1 + escaped.len_utf8();
                }
            }
        }

        self.flush();

        Compiled {
            tokens: self.tokens,
            events: self.events,
        }
    }
}
