use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::{Board, Loc, Side};
use crate::heuristics::MoveHeuristic;

use super::{rails::move_targets, repetition::RepetitionGuard};

/// Options for configuring the search behavior
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Time allowed for one move
    pub move_time: Duration,
}

impl SearchOptions {
    pub fn new(move_time: Duration) -> Self {
        Self { move_time }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            move_time: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best `(from, to)` pair found, `None` when nothing may move
    pub best: Option<(Loc, Loc)>,
    pub score: f64,
    pub candidates: u32,
    /// Whether every piece was examined before the deadline
    pub complete: bool,
}

/// Score every candidate move of this side and keep the best one.
///
/// Ties go to the candidate found first. The deadline is only checked after
/// all moves of one piece have been scored.
pub fn search<H: MoveHeuristic>(
    board: &Board,
    heuristic: &H,
    guard: &RepetitionGuard,
    options: &SearchOptions,
) -> (SearchResult, f64) {
    let start_time = Instant::now();

    let mut result = SearchResult {
        best: None,
        score: f64::NEG_INFINITY,
        candidates: 0,
        complete: true,
    };

    let mut pieces = board.pieces(Side::Ally).peekable();
    while let Some(from) = pieces.next() {
        for to in move_targets(board, from) {
            result.candidates += 1;

            let score = heuristic.score(board, from, to);
            if score > result.score && !guard.is_blocked(from, to) {
                result.best = Some((from, to));
                result.score = score;
            }
        }

        if start_time.elapsed() >= options.move_time && pieces.peek().is_some() {
            debug!(candidates = result.candidates, "move time exhausted");
            result.complete = false;
            break;
        }
    }

    (result, start_time.elapsed().as_secs_f64())
}
