//! Incremental upkeep of which of this side's pieces may move where.

use crate::core::{
    loc::{Dir, Loc, BOARD_SIZE},
    map::{is_camp, step},
};

use super::Board;

/// One row of eight direction flags per square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalityMatrix {
    rows: [[bool; 8]; BOARD_SIZE],
}

impl LegalityMatrix {
    pub fn new() -> Self {
        Self {
            rows: [[false; 8]; BOARD_SIZE],
        }
    }

    pub fn get(&self, loc: Loc, dir: Dir) -> bool {
        self.rows[loc.index()][dir.slot()]
    }

    pub fn row(&self, loc: Loc) -> [bool; 8] {
        self.rows[loc.index()]
    }

    fn set(&mut self, loc: Loc, dir: Dir, value: bool) {
        self.rows[loc.index()][dir.slot()] = value;
    }

    fn clear(&mut self, loc: Loc) {
        self.rows[loc.index()] = [false; 8];
    }

    /// Open directions of `loc`, in generation order.
    pub fn open_dirs(&self, loc: Loc) -> impl Iterator<Item = Dir> + '_ {
        Dir::ALL.into_iter().filter(move |&dir| self.get(loc, dir))
    }
}

impl Default for LegalityMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Recompute the legality entries touching `loc`: its own row and the
    /// inverse entry of every connected neighbour.
    pub(super) fn refresh_legality(&mut self, loc: Loc) {
        self.legality.clear(loc);

        for dir in Dir::ALL {
            if let Some(next) = step(loc, dir) {
                self.refresh_line(loc, dir, next);
            }
        }

        if !self.is_mobile(loc) {
            self.legality.clear(loc);
        }
    }

    /// Rebuild the whole matrix from the squares.
    pub fn refresh_all_legality(&mut self) {
        for loc in Loc::all() {
            self.refresh_legality(loc);
        }
    }

    fn refresh_line(&mut self, here: Loc, dir: Dir, next: Loc) {
        match (self.is_ally(here), self.is_ally(next)) {
            (true, true) => {
                self.legality.set(here, dir, false);
                self.legality.set(next, dir.inverse(), false);
            }
            (true, false) => {
                let open = self.may_enter(here, next);
                self.legality.set(here, dir, open);
            }
            (false, true) => {
                let open = self.may_enter(next, here);
                self.legality.set(next, dir.inverse(), open);
            }
            (false, false) => {}
        }
    }

    /// Whether this side's piece on `from` may step onto the non-allied
    /// square `to`: empty squares are always open, enemies only outside camps.
    fn may_enter(&self, from: Loc, to: Loc) -> bool {
        self.is_mobile(from) && (self.is_empty(to) || !is_camp(to))
    }
}
