use tracing::debug;

use crate::core::Loc;

/// Moves between the same two squares allowed in a row.
pub const MAX_REPEATS: u32 = 3;

/// Tracks consecutive moves between the same unordered pair of squares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionGuard {
    pair: Option<(Loc, Loc)>,
    count: u32,
}

impl RepetitionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a move between `from` and `to` would break the three-turn rule.
    pub fn is_blocked(&self, from: Loc, to: Loc) -> bool {
        self.count >= MAX_REPEATS && self.pair == Some(unordered(from, to))
    }

    /// Record the move chosen this turn.
    pub fn record(&mut self, from: Loc, to: Loc) {
        let pair = unordered(from, to);
        if self.pair == Some(pair) {
            self.count += 1;
        } else {
            self.pair = Some(pair);
            self.count = 1;
        }
        debug!(low = %pair.0, high = %pair.1, count = self.count, "recorded move");
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

fn unordered(a: Loc, b: Loc) -> (Loc, Loc) {
    if a.index() <= b.index() {
        (a, b)
    } else {
        (b, a)
    }
}
