use std::collections::HashSet;
use std::time::Duration;

use sapper::core::{
    map::{is_on_rail, step},
    Board, Dir, Loc, MoveResult, PlayerNumber, Rank, Side, Square,
};
use sapper::engine::{rails::move_targets, search, Engine, RepetitionGuard, SearchOptions};
use sapper::heuristics::{MoveHeuristic, PieceWeights, TacticalHeuristic};

fn loc(index: usize) -> Loc {
    Loc::from_index(index)
}

fn board_with(pieces: &[(usize, Rank, Side)]) -> Board {
    let mut board = Board::empty();
    for &(index, rank, side) in pieces {
        board.place(loc(index), Square::new(rank, side));
    }
    board
}

fn assert_no_self_capture(board: &Board) {
    for from in Loc::all() {
        for dir in Dir::ALL {
            let Some(to) = step(from, dir) else {
                continue;
            };
            if board.is_ally(from) && board.is_ally(to) {
                assert!(!board.can_move(from, dir), "{} -> {}", from, to);
                assert!(!board.can_move(to, dir.inverse()), "{} -> {}", to, from);
            }
            if !board.is_ally(from) {
                assert!(!board.can_move(from, dir), "{} is not ours", from);
            }
        }
    }
}

#[test]
fn test_legality_never_allows_self_capture() {
    let mut engine = Engine::new();
    engine.init(PlayerNumber::ONE, Duration::from_secs(1)).unwrap();
    assert_no_self_capture(&engine.board);

    // Play our own moves as uncontested steps and check after each
    for _ in 0..20 {
        let Some((from, to)) = engine.go() else {
            break;
        };
        let result = if engine.board.is_enemy(to) { MoveResult::Won } else { MoveResult::None };
        engine.outcome(from, to, result);
        assert_no_self_capture(&engine.board);

        let mut rebuilt = engine.board.clone();
        rebuilt.refresh_all_legality();
        assert_eq!(rebuilt.legality(), engine.board.legality());
    }
}

#[test]
fn test_outcome_matches_direct_placement() {
    let mut resolved = Board::new_match();
    resolved.place(loc(30), Square::EMPTY);
    let mut placed = resolved.clone();

    resolved.resolve(loc(25), loc(30), MoveResult::None).unwrap();
    placed.place(loc(25), Square::EMPTY);
    placed.place(loc(30), Square::new(Rank::General, Side::Ally));

    assert_eq!(resolved, placed);
}

#[test]
fn test_straight_slide_reaches_first_enemy() {
    let board = board_with(&[
        (5, Rank::Major, Side::Ally),
        (35, Rank::Unknown, Side::Enemy),
    ]);

    let down: Vec<usize> = move_targets(&board, loc(5))
        .into_iter()
        .filter(|target| target.x == 0 && target.y > 1)
        .map(|target| target.index())
        .collect();
    assert_eq!(down, vec![10, 15, 20, 25, 30, 35]);
}

#[test]
fn test_engineer_visits_network_once_from_intersection() {
    let board = board_with(&[(32, Rank::Engineer, Side::Ally)]);
    for dir in Dir::ORTHOGONAL {
        assert!(board.can_move(loc(32), dir));
    }

    let targets = move_targets(&board, loc(32));
    let unique: HashSet<Loc> = targets.iter().copied().collect();
    assert_eq!(unique.len(), targets.len());

    let mut expected: HashSet<Loc> = Loc::all().filter(|&l| is_on_rail(l)).collect();
    expected.remove(&loc(32));
    // One step off the rails below, and the two camps diagonally ahead
    expected.extend([loc(36), loc(37), loc(38)]);
    assert_eq!(unique, expected);
}

struct Preferring(Loc, Loc);

impl MoveHeuristic for Preferring {
    fn score(&self, _board: &Board, from: Loc, to: Loc) -> f64 {
        if (from, to) == (self.0, self.1) {
            100.0
        } else {
            1.0
        }
    }
}

#[test]
fn test_fourth_repetition_loses_to_alternative_or_resigns() {
    let mut guard = RepetitionGuard::new();
    guard.record(loc(10), loc(15));
    guard.record(loc(15), loc(10));
    guard.record(loc(10), loc(15));

    let heuristic = Preferring(loc(10), loc(15));
    let options = SearchOptions::default();

    let open = board_with(&[(10, Rank::Colonel, Side::Ally)]);
    let (result, _) = search(&open, &heuristic, &guard, &options);
    let (from, to) = result.best.unwrap();
    assert_eq!(from, loc(10));
    assert_ne!(to, loc(15));

    let boxed_in = board_with(&[
        (10, Rank::Colonel, Side::Ally),
        (5, Rank::Landmine, Side::Ally),
        (11, Rank::Landmine, Side::Ally),
        (20, Rank::Landmine, Side::Ally),
    ]);
    assert_eq!(move_targets(&boxed_in, loc(10)), vec![loc(15)]);
    let (result, _) = search(&boxed_in, &heuristic, &guard, &options);
    assert_eq!(result.best, None);
}

#[test]
fn test_rank_bounds_only_rise() {
    let mut board = Board::new_match();
    let target = loc(32);
    let mut last = board.rank(target);

    let attackers = [27, 26, 28];
    for from in attackers {
        board.resolve(loc(from), target, MoveResult::Defeated).unwrap();
        let bound = board.rank(target);
        assert!(bound >= last, "{:?} fell below {:?}", bound, last);
        last = bound;
    }

    // Brigadier first, then two engineers: the bound stays one above the brigadier
    assert_eq!(last, Rank::MajorGeneral);
}

#[test]
fn test_initial_layout_serialisation() {
    let board = Board::new_match();
    assert_eq!(board.count(Side::Ally), 25);
    assert_eq!(board.pieces(Side::Enemy).filter(|&l| board.rank(l) == Rank::Unknown).count(), 25);

    assert_eq!(
        board.initial_layout().to_string(),
        "( ( E1 2 )( D1 F )( C1 2 )( B1 2 )( A1 3 )\
         ( E2 L )( D2 L )( C2 L )( B2 5 )( A2 1 )\
         ( E3 7 )( C3 9 )( A3 4 )\
         ( E4 6 )( D4 3 )( B4 3 )( A4 B )\
         ( E5 B )( C5 7 )( A5 5 )\
         ( E6 8 )( D6 1 )( C6 6 )( B6 1 )( A6 4 ) )"
    );
}

#[test]
fn test_engineer_prefers_branch_towards_enemy() {
    let board = board_with(&[
        (54, Rank::Engineer, Side::Ally),
        (51, Rank::Unknown, Side::Enemy),
    ]);

    let targets = move_targets(&board, loc(54));
    assert!(targets.contains(&loc(51)));
    assert!(targets.contains(&loc(49)));

    let weights = PieceWeights::fixed();
    let heuristic = TacticalHeuristic::new(&weights);
    let towards_enemy = heuristic.score(&board, loc(54), loc(51));
    let towards_home = heuristic.score(&board, loc(54), loc(49));
    assert!(towards_enemy > towards_home);
}
