//! Rule-based scoring of a single move from what this side knows.

use crate::core::{
    map::{is_camp_of, is_headquarters_of, min_rail_distance, ENEMY_GATES, HEADQUARTERS},
    Board, Loc, Rank, Side,
};

use super::{traits::MoveHeuristic, weights::PieceWeights};

/// Rows `0..INTRUSION_ROWS` count as the home base.
const INTRUSION_ROWS: i32 = 3;
/// Below this many pieces the remaining army pushes forward.
const ALL_OUT_ATTACK_BELOW: usize = 13;
/// Rows from which an engineer is allowed to act.
const ENGINEER_ROWS: std::ops::Range<i32> = 10..12;
/// Enemy back rows, where landmines may stand.
const MINE_ROWS: std::ops::Range<i32> = 10..12;
/// Row swept by the general along the enemy front.
const SWEEP_ROW: i32 = 7;
const PROXIMITY: i32 = 15;

pub struct TacticalHeuristic<'w> {
    weights: &'w PieceWeights,
}

impl<'w> TacticalHeuristic<'w> {
    pub fn new(weights: &'w PieceWeights) -> Self {
        Self { weights }
    }
}

impl MoveHeuristic for TacticalHeuristic<'_> {
    fn score(&self, board: &Board, from: Loc, to: Loc) -> f64 {
        let mover = board.rank(from);
        let target = board.rank(to);

        if is_vetoed(from, to, mover, target) {
            return 0.0;
        }

        if let Some(score) = decisive_score(board, to, mover, target) {
            return score;
        }

        self.weighted_score(board, from, to, mover, target)
    }
}

impl TacticalHeuristic<'_> {
    fn weighted_score(&self, board: &Board, from: Loc, to: Loc, mover: Rank, target: Rank) -> f64 {
        let w = self.weights.for_rank(mover);
        let rank = mover.value() as f64;
        let home = HEADQUARTERS[Side::Ally][0];
        let flag_distance = distance_to_suspected_flag(board, to) as f64;
        let attacking = board.is_enemy(to);

        let mut score = 0.0;

        if attacking && target == Rank::Unknown {
            if mover == Rank::Bomb {
                score += rank * w.attack_unknown;
            }
            let rows_to_baseline = (Side::Enemy.back_row() - from.y) as f64;
            score += (13.0 - rows_to_baseline) * w.attack_unknown;
        }

        // A square untouched since the opening may still hold a mine
        let back_unknown = attacking && target == Rank::Unknown && MINE_ROWS.contains(&to.y);
        if back_unknown && !board.has_moved(to) {
            if mover == Rank::Engineer {
                score += w.defuse_mine;
            }
        } else if back_unknown && (mover > Rank::Major || mover == Rank::Bomb) {
            score += w.attack_unknown;
        }

        if attacking && target == Rank::Flag {
            score += w.capture_flag;
        }

        let mut rail = min_rail_distance(to) as f64 * w.move_towards_rail;
        if mover == Rank::Engineer {
            rail *= 2.0;
        }
        score += rail;

        if attacking && ((target > Rank::Unknown && mover > target) || mover == Rank::Bomb) {
            score += w.beat_opponent;
        }

        score += (PROXIMITY as f64 - flag_distance) * w.approach_enemy_flag;

        if is_camp_of(to, Side::Enemy) {
            score += (PROXIMITY as f64 - flag_distance) * w.approach_enemy_camp;
        }

        if board.any_in_rows(Side::Enemy, 0..6)
            && is_camp_of(to, Side::Ally)
            && mover != Rank::Bomb
        {
            let shelter = (PROXIMITY - to.dist(&home)) as f64 + rank;
            score += shelter * w.approach_own_camp;
        }

        if mover == Rank::General && from.y == SWEEP_ROW && to.y == SWEEP_ROW && !board.is_empty(to) {
            score += Rank::General.value() as f64 * w.attack_unknown;
        }

        let mut intruded = false;
        for intruder in board.pieces_in_rows(Side::Enemy, 0..INTRUSION_ROWS) {
            intruded = true;
            if to.y < INTRUSION_ROWS {
                let defence = (PROXIMITY - to.dist(&home)) as f64 + rank;
                score += defence * w.protect_base;
            }
            if to == intruder && (mover > board.rank(intruder) || mover == Rank::Bomb) {
                score += rank * w.kill_intruder;
            }
        }

        if is_headquarters_of(to, Side::Enemy) {
            let patriot = (Rank::FieldMarshal.value() - mover.value()) as f64;
            score += patriot * w.brave_patriot;
        }

        score += w.heading(from, to);

        if board.count(Side::Ally) < ALL_OUT_ATTACK_BELOW
            && !intruded
            && !board.any_in_rows(Side::Ally, 9..12)
            && to.y > from.y
        {
            score += w.all_out_attack;
        }

        score
    }
}

fn is_vetoed(from: Loc, to: Loc, mover: Rank, target: Rank) -> bool {
    is_headquarters_of(to, Side::Ally)
        || (mover < target && mover != Rank::Bomb)
        || (mover == Rank::Engineer && !ENGINEER_ROWS.contains(&to.y))
        || (is_camp_of(from, Side::Enemy) && to.y < from.y)
        || (mover == Rank::Bomb && is_camp_of(to, Side::Ally))
}

/// Scores that settle the choice outright, strongest first.
fn decisive_score(board: &Board, to: Loc, mover: Rank, target: Rank) -> Option<f64> {
    let flag = board.enemy_flag();

    if is_headquarters_of(to, Side::Enemy) && (flag.is_none() || flag == Some(to)) {
        return Some(f64::INFINITY);
    }

    if mover == Rank::Bomb && target == Rank::FieldMarshal && board.is_enemy(to) {
        return Some(f64::MAX / 2.0);
    }

    let flag_gate = flag.and_then(gate_of);
    let on_gate = ENEMY_GATES.contains(&to);

    if mover == Rank::Engineer && ENGINEER_ROWS.contains(&to.y) {
        if flag_gate == Some(to) {
            return Some(f64::MAX / 2.0);
        } else if on_gate {
            return Some(f64::MAX / 3.0);
        } else if board.is_enemy(to) && target > Rank::Unknown && mover >= target {
            return Some(f64::MAX / 4.0);
        }
    }

    if flag_gate == Some(to) {
        Some(f64::MAX / 5.0)
    } else if on_gate {
        Some(f64::MAX / 6.0)
    } else {
        None
    }
}

/// The square in front of an enemy headquarters.
fn gate_of(headquarters: Loc) -> Option<Loc> {
    HEADQUARTERS[Side::Enemy]
        .iter()
        .position(|&hq| hq == headquarters)
        .map(|i| ENEMY_GATES[i])
}

/// Distance to the revealed flag, or to the nearer enemy headquarters while
/// the flag is hidden.
fn distance_to_suspected_flag(board: &Board, loc: Loc) -> i32 {
    match board.enemy_flag() {
        Some(flag) => loc.dist(&flag),
        None => HEADQUARTERS[Side::Enemy]
            .iter()
            .map(|hq| loc.dist(hq))
            .min()
            .unwrap_or(0),
    }
}
