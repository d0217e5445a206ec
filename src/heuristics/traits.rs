use crate::core::{Board, Loc};

/// Scores a single candidate move of this side's piece on `from` to `to`.
///
/// Higher is better. `0.0` marks a move that should never be preferred over
/// any positively scored alternative, and `f64::INFINITY` a winning one.
pub trait MoveHeuristic {
    fn score(&self, board: &Board, from: Loc, to: Loc) -> f64;
}
