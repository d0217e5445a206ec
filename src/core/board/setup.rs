//! Opening layout and its serialisation for the referee

use std::fmt::Display;

use crate::core::{
    loc::{Loc, BOARD_SIZE},
    map::is_camp,
    rank::Rank,
    side::Side,
};

use super::{Board, Square};

/// This side's opening layout for indices `0..30`, row by row from the back
/// rank. Camps are left empty.
pub const INITIAL_LAYOUT: [Rank; BOARD_SIZE / 2] = [
    // row 1
    Rank::Lieutenant, Rank::Flag, Rank::Lieutenant, Rank::Lieutenant, Rank::Captain,
    // row 2
    Rank::Landmine, Rank::Landmine, Rank::Landmine, Rank::Colonel, Rank::Engineer,
    // row 3
    Rank::MajorGeneral, Rank::Empty, Rank::FieldMarshal, Rank::Empty, Rank::Major,
    // row 4
    Rank::BrigadierGeneral, Rank::Captain, Rank::Empty, Rank::Captain, Rank::Bomb,
    // row 5
    Rank::Bomb, Rank::Empty, Rank::MajorGeneral, Rank::Empty, Rank::Colonel,
    // row 6
    Rank::General, Rank::Engineer, Rank::BrigadierGeneral, Rank::Engineer, Rank::Major,
];

impl Board {
    /// The board at the start of a match: our layout on rows 1–6, an unknown
    /// enemy piece on every non-camp square of rows 7–12.
    pub fn new_match() -> Self {
        let mut board = Board::empty();

        for loc in Loc::all() {
            let square = if is_camp(loc) {
                Square::EMPTY
            } else if Side::Ally.owns_row(loc.y) {
                match INITIAL_LAYOUT[loc.index()] {
                    Rank::Empty => Square::EMPTY,
                    rank => Square::new(rank, Side::Ally),
                }
            } else {
                Square::new(Rank::Unknown, Side::Enemy)
            };
            board.squares[loc.index()] = square;
        }

        board.refresh_all_legality();
        board
    }

    /// Every allied piece of the opening half, for the reply to `init`.
    pub fn initial_layout(&self) -> InitialLayout {
        let placements = Loc::all()
            .filter(|&loc| Side::Ally.owns_row(loc.y))
            .filter(|&loc| self.is_ally(loc) && self.rank(loc) > Rank::Unknown)
            .map(|loc| (loc, self.rank(loc)))
            .collect();

        InitialLayout { placements }
    }
}

/// Placement list sent to the referee, e.g. `( ( E1 2 )( D1 F ) )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialLayout {
    pub placements: Vec<(Loc, Rank)>,
}

impl Display for InitialLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "( ")?;
        for (loc, rank) in &self.placements {
            write!(f, "( {} {} )", loc, rank.to_code())?;
        }
        write!(f, " )")
    }
}
