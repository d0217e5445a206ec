//! Expansion of open directions into destination squares, including slides
//! along the rails.

use crate::core::{
    loc::BOARD_SIZE,
    map::{is_intersection, is_on_rail, step},
    Board, Dir, Loc, Rank,
};

/// `(square, heading)` pairs already travelled by an engineer.
type Covered = [[bool; 8]; BOARD_SIZE];

/// Every destination of this side's piece on `from`, in generation order:
/// directions as in [`Dir::ALL`], rail squares in the order they are reached.
/// No square appears twice.
pub fn move_targets(board: &Board, from: Loc) -> Vec<Loc> {
    let mut targets = Vec::new();
    let mut covered: Covered = [[false; 8]; BOARD_SIZE];
    let engineer = board.rank(from) == Rank::Engineer;

    for dir in board.legality().open_dirs(from) {
        let Some(first) = step(from, dir) else {
            continue;
        };

        if dir.is_diagonal() || !is_on_rail(from) || !is_on_rail(first) {
            push_unique(&mut targets, first);
        } else if engineer {
            engineer_traverse(board, dir, first, &mut covered, &mut targets);
        } else {
            slide(board, dir, first, &mut targets);
        }
    }

    targets
}

/// Whether a rail traversal may continue onto `next`.
fn may_continue(board: &Board, next: Option<Loc>) -> Option<Loc> {
    next.filter(|&loc| is_on_rail(loc) && !board.is_ally(loc))
}

/// Straight slide in `dir` starting at `first`, up to and including the first
/// enemy.
fn slide(board: &Board, dir: Dir, first: Loc, targets: &mut Vec<Loc>) {
    let mut here = first;
    loop {
        push_unique(targets, here);
        if board.is_enemy(here) {
            break;
        }
        match may_continue(board, step(here, dir)) {
            Some(next) => here = next,
            None => break,
        }
    }
}

/// Engineer traversal: straight runs that fan out into every orthogonal
/// branch at an intersection.
fn engineer_traverse(
    board: &Board,
    dir: Dir,
    first: Loc,
    covered: &mut Covered,
    targets: &mut Vec<Loc>,
) {
    let mut stack = vec![(first, dir)];

    while let Some((mut here, heading)) = stack.pop() {
        loop {
            let line = &mut covered[here.index()][heading.slot()];
            if *line {
                break;
            }
            *line = true;

            push_unique(targets, here);
            if board.is_enemy(here) {
                break;
            }

            if is_intersection(here) {
                // Reversed so the first direction is explored first
                for branch in Dir::ORTHOGONAL.into_iter().rev() {
                    if let Some(next) = may_continue(board, step(here, branch)) {
                        stack.push((next, branch));
                    }
                }
                break;
            }

            match may_continue(board, step(here, heading)) {
                Some(next) => here = next,
                None => break,
            }
        }
    }
}

fn push_unique(targets: &mut Vec<Loc>, loc: Loc) {
    if !targets.contains(&loc) {
        targets.push(loc);
    }
}
