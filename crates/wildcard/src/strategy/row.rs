use crate::profile::Footprint;
use crate::token::Token;

/// A state of the pattern automaton. Every state except `Many` consumes exactly one byte.
#[derive(Clone, Copy)]
enum State {
    Byte(u8),
    Any,
    Many,
}

/// Single-row restatement of the dense table.
///
/// Literal tokens are unrolled into one state per byte so that every step of
/// the recurrence advances by exactly one character. The row is updated left
/// to right, `diagonal` holding the previous row's value of the column to the left.
pub(super) fn run(text: &[u8], tokens: &[Token]) -> (bool, Footprint) {
    let states = unroll(tokens);
    let k = states.len();
    let mut row = vec![false; k + 1];

    row[0] = true;
    for (j, state) in (1..=k).zip(&states) {
        row[j] = matches!(state, State::Many) && row[j - 1];
    }

    for &ch in text {
        let mut diagonal = row[0];
        row[0] = false;
        for (j, state) in (1..=k).zip(&states) {
            let up = row[j];
            row[j] = match *state {
                State::Many => row[j - 1] || up,
                State::Any => diagonal,
                State::Byte(b) => b == ch && diagonal,
            };
            diagonal = up;
        }
    }

    (row[k], Footprint::Row { cols: k + 1 })
}

fn unroll(tokens: &[Token]) -> Vec<State> {
    let mut states = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Literal(value) => states.extend(value.bytes().map(State::Byte)),
            Token::AnyChar => states.push(State::Any),
            Token::AnySequence => states.push(State::Many),
        }
    }
    states
}
