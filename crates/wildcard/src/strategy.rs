use std::fmt;

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::profile::Footprint;
use crate::token::Token;

mod dp;
mod greedy;
mod grid;
mod memo;
mod recursive;
mod row;

pub(crate) use greedy::BacktrackPoint;
pub(crate) use memo::Cell;

// ---

/// One of the interchangeable matching algorithms.
///
/// All strategies agree on every input, they only differ in how much time and
/// memory they need to get there.
///
/// ```
/// use wildcard::{Strategy, compile};
///
/// let tokens = compile("*a?").tokens;
/// assert!(Strategy::all().all(|s| !s.matches("ba", &tokens)));
/// assert_eq!("memo".parse::<Strategy>().unwrap(), Strategy::Memo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Recursive backtracking without any memory of visited states.
    Recursive,
    /// Recursive backtracking caching the outcome of every state.
    Memo,
    /// Dense dynamic programming table.
    Dp,
    /// Single-row dynamic programming over the pattern state machine.
    Row,
    /// Two-pointer greedy matching with a single backtrack point.
    #[default]
    Greedy,
}

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Recursive => "Recursive Backtracking",
            Self::Memo => "Memoized Recursion",
            Self::Dp => "Dynamic Programming",
            Self::Row => "Single-Row Dynamic Programming",
            Self::Greedy => "Greedy Two-Pointer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Recursive => "Recursive backtracking, exponential in the worst case.",
            Self::Memo => "Memoized recursion, O(m*n) time and space.",
            Self::Dp => "Dense dynamic programming table, O(m*n) time and space.",
            Self::Row => "Single-row dynamic programming, O(m*n) time and O(n) space.",
            Self::Greedy => "Two-pointer greedy algorithm with one backtrack point (default).",
        }
    }

    /// Tests whether the whole text matches the compiled tokens.
    #[inline]
    pub fn matches(self, text: &str, tokens: &[Token]) -> bool {
        self.run(text.as_bytes(), tokens).0
    }

    pub(crate) fn run(self, text: &[u8], tokens: &[Token]) -> (bool, Footprint) {
        match self {
            Self::Recursive => recursive::run(text, tokens),
            Self::Memo => memo::run(text, tokens),
            Self::Dp => dp::run(text, tokens),
            Self::Row => row::run(text, tokens),
            Self::Greedy => greedy::run(text, tokens),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
