use std::fmt;

/// One compiled unit of a wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A maximal run of literal characters, matched exactly. Never empty.
    Literal(String),
    /// The `?` wildcard, matches exactly one character.
    AnyChar,
    /// The `*` wildcard, matches zero or more characters.
    AnySequence,
}

impl Token {
    #[inline]
    pub fn is_any_sequence(&self) -> bool {
        matches!(self, Self::AnySequence)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => {
                for ch in value.chars() {
                    match ch {
                        '*' | '?' | '\\' => write!(f, "\\{}", ch)?,
                        _ => write!(f, "{}", ch)?,
                    }
                }
                Ok(())
            }
            Self::AnyChar => f.write_str("?"),
            Self::AnySequence => f.write_str("*"),
        }
    }
}
