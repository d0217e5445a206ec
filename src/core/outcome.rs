//! Applying referee-reported move results and what they reveal about the
//! opponent's pieces.

use std::{fmt::Display, str::FromStr};

use anyhow::{bail, ensure, Result};
use tracing::debug;

use super::{
    board::{Board, Square},
    loc::Loc,
    map::is_on_rail,
    rank::Rank,
    side::Side,
};

/// Result of a completed move, from the moving piece's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// Plain move onto an empty square.
    None,
    /// The mover beat the piece it attacked.
    Won,
    /// The mover lost against the piece it attacked.
    Defeated,
    /// Both pieces were removed.
    Draw,
}

impl FromStr for MoveResult {
    type Err = anyhow::Error;

    /// Parses the referee's comparison symbol. No symbol means no combat.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(MoveResult::None),
            ">" => Ok(MoveResult::Won),
            "<" => Ok(MoveResult::Defeated),
            "=" => Ok(MoveResult::Draw),
            _ => bail!("Unknown outcome comparison: {}", s),
        }
    }
}

impl Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            MoveResult::None => "",
            MoveResult::Won => ">",
            MoveResult::Defeated => "<",
            MoveResult::Draw => "=",
        };
        write!(f, "{}", symbol)
    }
}

impl Board {
    /// Apply the referee's report of a move from `from` to `to`.
    ///
    /// A report that cannot have happened from the current position is
    /// rejected before anything is changed.
    pub fn resolve(&mut self, from: Loc, to: Loc, result: MoveResult) -> Result<()> {
        self.check_report(from, to, result)?;

        let mover = self.square(from);
        let defender = self.square(to);

        match result {
            MoveResult::Draw => {
                self.place(from, Square::EMPTY);
                self.place(to, Square::EMPTY);
            }
            MoveResult::Defeated => {
                if mover.owner == Some(Side::Ally) {
                    self.infer_defender(to, mover.rank);
                }
                self.place(from, Square::EMPTY);
            }
            MoveResult::Won => {
                let mut winner = mover;
                if mover.owner == Some(Side::Enemy) {
                    winner.rank = inferred_attacker(mover.rank, defender.rank);
                }
                self.place(from, Square::EMPTY);
                self.place(to, winner);
            }
            MoveResult::None => {
                let mut moved = mover;
                if mover.owner == Some(Side::Enemy)
                    && turned_on_rails(from, to)
                    && mover.rank <= Rank::Engineer
                {
                    debug!(%from, %to, "enemy changed direction on the rails, marking engineer");
                    moved.rank = Rank::Engineer;
                }
                self.place(from, Square::EMPTY);
                self.place(to, moved);
            }
        }

        Ok(())
    }

    fn check_report(&self, from: Loc, to: Loc, result: MoveResult) -> Result<()> {
        ensure!(from.in_bounds() && to.in_bounds(), "Move {} {} is off the board", from, to);
        ensure!(from != to, "Move from {} to itself", from);

        let mover = self.owner(from);
        let target = self.owner(to);

        let Some(mover) = mover else {
            bail!("No piece on {} to move", from);
        };

        match result {
            MoveResult::None => ensure!(target.is_none(),
                "Plain move from {} onto occupied {}", from, to),
            _ => ensure!(target == Some(!mover),
                "Combat from {} against {} which holds no opposing piece", from, to),
        }

        Ok(())
    }

    /// Our attacker of rank `attacker` lost against the enemy on `loc`.
    fn infer_defender(&mut self, loc: Loc, attacker: Rank) {
        if self.rank(loc) > attacker {
            return;
        }

        match attacker.succ() {
            Some(bound) => self.raise_rank(loc, bound),
            // Nothing outranks the field marshal: only a landmine beats it.
            None => self.reclassify(loc, Rank::Landmine),
        }
    }
}

/// Believed rank of an enemy piece that just beat our `defender`.
fn inferred_attacker(believed: Rank, defender: Rank) -> Rank {
    match defender {
        Rank::Landmine => Rank::Engineer,
        Rank::Flag | Rank::Empty | Rank::Unknown => believed,
        _ if believed > defender => believed,
        _ => defender.succ().unwrap_or(believed),
    }
}

/// Diagonal lines never join two rail squares, so a rail move that ends off
/// its starting row and column turned at an intersection. Only engineers can.
fn turned_on_rails(from: Loc, to: Loc) -> bool {
    is_on_rail(from) && is_on_rail(to) && from.x != to.x && from.y != to.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loc::Dir;

    fn loc(index: usize) -> Loc {
        Loc::from_index(index)
    }

    #[test]
    fn test_parse_result() {
        assert_eq!("".parse::<MoveResult>().unwrap(), MoveResult::None);
        assert_eq!(">".parse::<MoveResult>().unwrap(), MoveResult::Won);
        assert_eq!("<".parse::<MoveResult>().unwrap(), MoveResult::Defeated);
        assert_eq!("=".parse::<MoveResult>().unwrap(), MoveResult::Draw);
        assert!("?".parse::<MoveResult>().is_err());
    }

    #[test]
    fn test_draw_empties_both() {
        let mut board = Board::new_match();
        board.place(loc(30), Square::new(Rank::General, Side::Ally));

        board.resolve(loc(30), loc(35), MoveResult::Draw).unwrap();
        assert!(board.is_empty(loc(30)));
        assert!(board.is_empty(loc(35)));
        assert_eq!(board.legality().row(loc(30)), [false; 8]);
        assert_eq!(board.legality().row(loc(35)), [false; 8]);
    }

    #[test]
    fn test_defeat_raises_defender() {
        let mut board = Board::new_match();

        // 27 -> 32 is the central spur, our brigadier attacks.
        board.resolve(loc(27), loc(32), MoveResult::Defeated).unwrap();
        assert!(board.is_empty(loc(27)));
        assert_eq!(board.rank(loc(32)), Rank::MajorGeneral);
        assert!(board.is_enemy(loc(32)));
    }

    #[test]
    fn test_defeat_keeps_higher_bound() {
        let mut board = Board::new_match();
        board.raise_rank(loc(30), Rank::FieldMarshal);

        board.resolve(loc(25), loc(30), MoveResult::Defeated).unwrap();
        assert_eq!(board.rank(loc(30)), Rank::FieldMarshal);
    }

    #[test]
    fn test_marshal_defeat_means_landmine() {
        let mut board = Board::empty();
        board.place(loc(27), Square::new(Rank::FieldMarshal, Side::Ally));
        board.place(loc(32), Square::new(Rank::Unknown, Side::Enemy));

        board.resolve(loc(27), loc(32), MoveResult::Defeated).unwrap();
        assert_eq!(board.rank(loc(32)), Rank::Landmine);
    }

    #[test]
    fn test_enemy_win_raises_attacker() {
        let mut board = Board::new_match();
        board.resolve(loc(30), loc(25), MoveResult::Won).unwrap();

        assert!(board.is_empty(loc(30)));
        assert!(board.is_enemy(loc(25)));
        assert_eq!(board.rank(loc(25)), Rank::FieldMarshal);
    }

    #[test]
    fn test_enemy_beating_landmine_is_engineer() {
        let mut board = Board::empty();
        board.place(loc(5), Square::new(Rank::Landmine, Side::Ally));
        board.place(loc(10), Square::new(Rank::Unknown, Side::Enemy));

        board.resolve(loc(10), loc(5), MoveResult::Won).unwrap();
        assert_eq!(board.rank(loc(5)), Rank::Engineer);
        assert!(board.is_enemy(loc(5)));
    }

    #[test]
    fn test_plain_move_carries_knowledge() {
        let mut board = Board::new_match();
        board.raise_rank(loc(30), Rank::Colonel);
        board.place(loc(25), Square::EMPTY);

        board.resolve(loc(30), loc(25), MoveResult::None).unwrap();
        assert_eq!(board.square(loc(25)), Square::new(Rank::Colonel, Side::Enemy));
        assert!(board.is_empty(loc(30)));
    }

    #[test]
    fn test_turning_rail_move_marks_engineer() {
        let mut board = Board::empty();
        board.place(loc(54), Square::new(Rank::Unknown, Side::Enemy));

        board.resolve(loc(54), loc(34), MoveResult::None).unwrap();
        assert_eq!(board.rank(loc(34)), Rank::Unknown);

        board.resolve(loc(34), loc(27), MoveResult::None).unwrap();
        assert_eq!(board.rank(loc(27)), Rank::Engineer);
    }

    #[test]
    fn test_plain_move_matches_place() {
        let mut resolved = Board::new_match();
        resolved.place(loc(10), Square::EMPTY);
        let mut placed = resolved.clone();

        resolved.resolve(loc(15), loc(10), MoveResult::None).unwrap();
        placed.place(loc(15), Square::EMPTY);
        placed.place(loc(10), Square::new(Rank::BrigadierGeneral, Side::Ally));

        assert_eq!(resolved, placed);
        assert!(resolved.can_move(loc(10), Dir::Down));
    }

    #[test]
    fn test_inconsistent_reports_do_nothing() {
        let mut board = Board::new_match();
        let before = board.clone();

        assert!(board.resolve(loc(11), loc(16), MoveResult::None).is_err());
        assert!(board.resolve(loc(15), loc(20), MoveResult::Won).is_err());
        assert!(board.resolve(loc(25), loc(25), MoveResult::None).is_err());
        assert!(board.resolve(loc(25), loc(30), MoveResult::None).is_err());
        assert_eq!(board, before);
    }
}
