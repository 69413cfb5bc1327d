//! A wildcard pattern compiler with five interchangeable matching strategies.
//!
//! Patterns are compiled into a list of [`Token`]s together with a list of
//! [`ParseEvent`]s describing anything suspicious the compiler had to recover from.
//! Events are turned into classified [`Issue`]s by [`validate_events`], and any
//! [`Strategy`] can then be run over the compiled tokens, optionally wrapped in
//! [`profile`] to get elapsed time and an estimate of the extra memory used.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one character
//! - `\*`, `\?`, `\\` - Escaped literal characters
//! - Any other character matches itself
//!
//! Only ASCII text and patterns are accepted, see [`validate_raw`].
//!
//! # Examples
//!
//! ```
//! use wildcard::{Strategy, compile, validate_events};
//!
//! let compiled = compile("m*iss*pi");
//! assert!(validate_events(&compiled.events).is_empty());
//!
//! for strategy in Strategy::all() {
//!     assert!(strategy.matches("mississippi", &compiled.tokens));
//! }
//! ```
//!
//! # Diagnostics
//!
//! Compilation never fails. Malformed escapes are recovered as literals and
//! redundant asterisks are merged, but both are reported:
//!
//! ```
//! use wildcard::{IssueCode, compile, has_errors, validate_events};
//!
//! let compiled = compile(r"a\nc**");
//! let issues = validate_events(&compiled.events);
//! assert_eq!(issues[0].code, IssueCode::UndefinedEscapeSequence);
//! assert_eq!(issues[1].code, IssueCode::ConsecutiveAsterisksMerged);
//! assert!(has_errors(&issues));
//! ```
//!
//! # Profiling
//!
//! ```
//! use wildcard::{Prepared, Strategy};
//!
//! let prepared = Prepared::new("aa", "*a").unwrap();
//! let profile = prepared.profile(Strategy::Dp);
//! assert!(profile.matched);
//! assert_eq!(profile.extra_bytes, 3 * 3);
//! ```

mod compiler;
mod issue;
mod pipeline;
mod profile;
mod strategy;
mod token;

pub use compiler::{Compiled, ParseEvent, compile};
pub use issue::{Issue, IssueCode, IssueType, has_errors, validate_events, validate_raw};
pub use pipeline::{Prepared, Rejected};
pub use profile::{FRAME_BYTES, Profile, profile};
pub use strategy::Strategy;
pub use token::Token;
