use super::grid::Grid;
use crate::profile::Footprint;
use crate::token::Token;

/// Fills `dp[i][j]`: "the first `i` text bytes match the first `j` tokens".
pub(super) fn run(text: &[u8], tokens: &[Token]) -> (bool, Footprint) {
    let m = text.len();
    let n = tokens.len();
    let mut dp = Grid::new(m + 1, n + 1, false);

    dp[(0, 0)] = true;
    for (j, token) in (1..=n).zip(tokens) {
        dp[(0, j)] = token.is_any_sequence() && dp[(0, j - 1)];
    }

    for i in 1..=m {
        for (j, token) in (1..=n).zip(tokens) {
            dp[(i, j)] = match token {
                Token::AnySequence => dp[(i, j - 1)] || dp[(i - 1, j)],
                Token::AnyChar => dp[(i - 1, j - 1)],
                Token::Literal(value) => {
                    let len = value.len();
                    i >= len && &text[i - len..i] == value.as_bytes() && dp[(i - len, j - 1)]
                }
            };
        }
    }

    (dp[(m, n)], Footprint::Table { rows: m + 1, cols: n + 1 })
}
