use crate::profile::Footprint;
use crate::token::Token;

/// The most recent `*` and the text index its current attempt started at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BacktrackPoint {
    token: usize,
    text: usize,
}

/// Two-pointer matching that only ever remembers the latest `*`.
///
/// Once a later `*` is reached, an earlier one never needs to absorb more
/// characters, so a single backtrack point is enough.
pub(super) fn run(text: &[u8], tokens: &[Token]) -> (bool, Footprint) {
    (matches(text, tokens), Footprint::Fixed)
}

fn matches(text: &[u8], tokens: &[Token]) -> bool {
    let m = text.len();
    let mut i = 0;
    let mut j = 0;
    let mut backtrack: Option<BacktrackPoint> = None;

    while i < m {
        let advanced = match tokens.get(j) {
            Some(Token::AnyChar) => {
                i += 1;
                true
            }
            Some(Token::Literal(value)) if text[i..].starts_with(value.as_bytes()) => {
                i += value.len();
                true
            }
            Some(Token::Literal(_) | Token::AnySequence) | None => false,
        };
        if advanced {
            j += 1;
            continue;
        }

        if let Some(Token::AnySequence) = tokens.get(j) {
            backtrack = Some(BacktrackPoint { token: j, text: i });
            j += 1;
        } else if let Some(point) = backtrack.as_mut() {
            point.text += 1;
            i = point.text;
            j = point.token + 1;
        } else {
            return false;
        }
    }

    tokens[j..].iter().all(Token::is_any_sequence)
}
