//! Board representation and what this side knows about it

pub mod legality;
pub mod setup;

pub use legality::LegalityMatrix;
pub use setup::{InitialLayout, INITIAL_LAYOUT};

use std::ops::Index;

use super::{
    loc::{Dir, Loc, BOARD_SIZE},
    map::is_headquarters,
    rank::Rank,
    side::Side,
};

/// Contents of one square as far as this side knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: Rank,
    pub owner: Option<Side>,
}

impl Square {
    pub const EMPTY: Square = Square { rank: Rank::Empty, owner: None };

    pub const fn new(rank: Rank, side: Side) -> Self {
        Self { rank, owner: Some(side) }
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The 60-square board together with the legality matrix derived from it.
///
/// All mutation goes through [`Board::place`], which keeps the legality
/// matrix in step with the squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; BOARD_SIZE],
    legality: LegalityMatrix,
    has_moved: [bool; BOARD_SIZE],
}

impl Board {
    /// A board with nothing on it.
    pub fn empty() -> Self {
        Self {
            squares: [Square::EMPTY; BOARD_SIZE],
            legality: LegalityMatrix::new(),
            has_moved: [false; BOARD_SIZE],
        }
    }

    pub fn square(&self, loc: Loc) -> Square {
        self.squares[loc.index()]
    }

    pub fn rank(&self, loc: Loc) -> Rank {
        self.squares[loc.index()].rank
    }

    pub fn owner(&self, loc: Loc) -> Option<Side> {
        self.squares[loc.index()].owner
    }

    pub fn is_empty(&self, loc: Loc) -> bool {
        self.squares[loc.index()].is_empty()
    }

    pub fn is_ally(&self, loc: Loc) -> bool {
        self.owner(loc) == Some(Side::Ally)
    }

    pub fn is_enemy(&self, loc: Loc) -> bool {
        self.owner(loc) == Some(Side::Enemy)
    }

    pub fn has_moved(&self, loc: Loc) -> bool {
        self.has_moved[loc.index()]
    }

    /// Whether this side's piece on `loc` may currently move in `dir`.
    pub fn can_move(&self, loc: Loc, dir: Dir) -> bool {
        self.legality.get(loc, dir)
    }

    pub fn legality(&self) -> &LegalityMatrix {
        &self.legality
    }

    /// Squares held by `side`, in index order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Loc> + '_ {
        Loc::all().filter(move |&loc| self.owner(loc) == Some(side))
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Squares held by `side` within rows `rows`.
    pub fn pieces_in_rows(
        &self,
        side: Side,
        rows: std::ops::Range<i32>,
    ) -> impl Iterator<Item = Loc> + '_ {
        self.pieces(side).filter(move |loc| rows.contains(&loc.y))
    }

    pub fn any_in_rows(&self, side: Side, rows: std::ops::Range<i32>) -> bool {
        self.pieces_in_rows(side, rows).next().is_some()
    }

    /// The revealed enemy flag, if the referee has disclosed it.
    pub fn enemy_flag(&self) -> Option<Loc> {
        self.pieces(Side::Enemy).find(|&loc| self.rank(loc) == Rank::Flag)
    }

    /// Overwrite `loc` and bring the legality matrix up to date for it and
    /// its neighbours.
    pub fn place(&mut self, loc: Loc, square: Square) {
        self.squares[loc.index()] = square;
        self.has_moved[loc.index()] = true;
        self.refresh_legality(loc);
    }

    /// Record the referee's disclosure of the enemy flag on `loc`.
    pub fn reveal_opponent_flag(&mut self, loc: Loc) {
        self.squares[loc.index()].rank = Rank::Flag;
    }

    /// Whether the piece on `loc` could ever leave it.
    pub fn is_mobile(&self, loc: Loc) -> bool {
        !self.rank(loc).is_immovable() && !is_headquarters(loc)
    }

    /// Tighten the believed rank of the piece on `loc`. Never lowers it.
    pub fn raise_rank(&mut self, loc: Loc, at_least: Rank) {
        let square = &mut self.squares[loc.index()];
        square.rank = square.rank.max(at_least);
    }

    /// Set the rank of the piece on `loc` outright, for the cases where a
    /// combat identifies it exactly.
    pub fn reclassify(&mut self, loc: Loc, rank: Rank) {
        self.squares[loc.index()].rank = rank;
    }
}

impl Index<Loc> for Board {
    type Output = Square;

    fn index(&self, loc: Loc) -> &Self::Output {
        &self.squares[loc.index()]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_match()
    }
}
