use crate::profile::Footprint;
use crate::token::Token;

/// Plain depth-first search over both `*` branches.
///
/// Exponential in the worst case. Recursion depth is bounded by
/// text length plus token count and is not limited here.
pub(super) fn run(text: &[u8], tokens: &[Token]) -> (bool, Footprint) {
    let (matched, depth) = Search { text, tokens }.visit(0, 0, 0);
    (matched, Footprint::Stack { depth })
}

struct Search<'a> {
    text: &'a [u8],
    tokens: &'a [Token],
}

impl Search<'_> {
    /// Returns the outcome for `text[i..]` against `tokens[j..]` together with
    /// the deepest call level reached while computing it.
    fn visit(&self, i: usize, j: usize, depth: usize) -> (bool, usize) {
        let Some(token) = self.tokens.get(j) else {
            return (i == self.text.len(), depth);
        };

        match token {
            Token::AnySequence => {
                let (matched, reached) = self.visit(i, j + 1, depth + 1);
                if matched || i == self.text.len() {
                    return (matched, reached);
                }
                let (matched, further) = self.visit(i + 1, j, depth + 1);
                (matched, reached.max(further))
            }
            Token::AnyChar => {
                if i < self.text.len() {
                    self.visit(i + 1, j + 1, depth + 1)
                } else {
                    (false, depth)
                }
            }
            Token::Literal(value) => {
                if self.text[i..].starts_with(value.as_bytes()) {
                    self.visit(i + value.len(), j + 1, depth + 1)
                } else {
                    (false, depth)
                }
            }
        }
    }
}
