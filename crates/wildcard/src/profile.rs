use std::mem::size_of;
use std::time::{Duration, Instant};

use crate::strategy::{BacktrackPoint, Cell, Strategy};
use crate::token::Token;

/// Assumed size of one recursive call frame: two indices and a return address.
///
/// Indices are `usize`, so a frame is 24 bytes on 64-bit targets rather than
/// the 16 bytes a frame with two 32-bit indices would take.
pub const FRAME_BYTES: usize = 2 * size_of::<usize>() + size_of::<*const ()>();

/// Outcome of a single profiled strategy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub matched: bool,
    pub elapsed: Duration,
    /// Analytical estimate of the auxiliary memory used, not a measurement.
    pub extra_bytes: usize,
}

impl Profile {
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// Runs one strategy over the text and tokens, timing it and estimating its extra memory.
///
/// The estimate follows a fixed formula per strategy:
///
/// | strategy    | estimate                                           |
/// |-------------|----------------------------------------------------|
/// | `recursive` | max depth × [`FRAME_BYTES`]                        |
/// | `memo`      | (m+1)(n+1) × cell size + max depth × [`FRAME_BYTES`] |
/// | `dp`        | (m+1)(n+1) × `size_of::<bool>()`                   |
/// | `row`       | (states+1) × `size_of::<bool>()`                   |
/// | `greedy`    | two cursors plus one optional backtrack point      |
///
/// where `m` is the text length and `n` the token count. The memo cell is the
/// tri-state `Cell`, one byte, not the two bytes an optional boolean with a
/// separate presence flag would take.
///
/// ```
/// use wildcard::{FRAME_BYTES, Strategy, compile, profile};
///
/// let tokens = compile("a?").tokens;
/// let profile = profile(Strategy::Recursive, "ab", &tokens);
/// assert!(profile.matched);
/// assert_eq!(profile.extra_bytes, 2 * FRAME_BYTES);
/// ```
pub fn profile(strategy: Strategy, text: &str, tokens: &[Token]) -> Profile {
    let start = Instant::now();
    let (matched, footprint) = strategy.run(text.as_bytes(), tokens);
    let elapsed = start.elapsed();
    let extra_bytes = footprint.estimate();

    log::debug!(
        "{} matched={} elapsed={:?} extra-bytes={} footprint={:?}",
        strategy,
        matched,
        elapsed,
        extra_bytes,
        footprint
    );

    Profile {
        matched,
        elapsed,
        extra_bytes,
    }
}

// ---

/// What a strategy reports about the working state it needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Footprint {
    Stack { depth: usize },
    Memo { rows: usize, cols: usize, depth: usize },
    Table { rows: usize, cols: usize },
    Row { cols: usize },
    Fixed,
}

impl Footprint {
    pub fn estimate(self) -> usize {
        match self {
            Self::Stack { depth } => depth * FRAME_BYTES,
            Self::Memo { rows, cols, depth } => rows * cols * size_of::<Cell>() + depth * FRAME_BYTES,
            Self::Table { rows, cols } => rows * cols * size_of::<bool>(),
            Self::Row { cols } => cols * size_of::<bool>(),
            Self::Fixed => 2 * size_of::<usize>() + size_of::<Option<BacktrackPoint>>(),
        }
    }
}
