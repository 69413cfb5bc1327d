use super::grid::Grid;
use crate::profile::Footprint;
use crate::token::Token;

/// Cached outcome of a `(text index, token index)` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Cell {
    #[default]
    Unknown,
    Matched,
    Failed,
}

/// Same branching as the plain recursive search, but every state is evaluated once.
pub(super) fn run(text: &[u8], tokens: &[Token]) -> (bool, Footprint) {
    let rows = text.len() + 1;
    let cols = tokens.len() + 1;
    let mut search = Search {
        text,
        tokens,
        memo: Grid::new(rows, cols, Cell::Unknown),
    };
    let (matched, depth) = search.visit(0, 0, 0);
    (matched, Footprint::Memo { rows, cols, depth })
}

struct Search<'a> {
    text: &'a [u8],
    tokens: &'a [Token],
    memo: Grid<Cell>,
}

impl Search<'_> {
    fn visit(&mut self, i: usize, j: usize, depth: usize) -> (bool, usize) {
        match self.memo[(i, j)] {
            Cell::Matched => return (true, depth),
            Cell::Failed => return (false, depth),
            Cell::Unknown => {}
        }

        let (matched, reached) = self.expand(i, j, depth);
        self.memo[(i, j)] = if matched { Cell::Matched } else { Cell::Failed };
        (matched, reached)
    }

    fn expand(&mut self, i: usize, j: usize, depth: usize) -> (bool, usize) {
        let m = self.text.len();
        let Some(token) = self.tokens.get(j) else {
            return (i == m, depth);
        };

        match token {
            Token::AnySequence => {
                let (matched, reached) = self.visit(i, j + 1, depth + 1);
                if matched || i == m {
                    return (matched, reached);
                }
                let (matched, further) = self.visit(i + 1, j, depth + 1);
                (matched, reached.max(further))
            }
            Token::AnyChar => {
                if i < m {
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
