use std::{fmt::Display, str::FromStr};
use anyhow::{bail, ensure, Context};

pub const BOARD_WIDTH: i32 = 5;
pub const BOARD_HEIGHT: i32 = 12;
pub const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Column letters of the referee's position names, indexed by `x`.
pub const COLUMN_NAMES: [char; BOARD_WIDTH as usize] = ['E', 'D', 'C', 'B', 'A'];

/// A square on the board. Row 0 is this agent's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub x: i32,
    pub y: i32,
}

impl Loc {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH &&
        self.y >= 0 && self.y < BOARD_HEIGHT
    }

    pub const fn from_index(index: usize) -> Self {
        Self {
            x: index as i32 % BOARD_WIDTH,
            y: index as i32 / BOARD_WIDTH,
        }
    }

    pub const fn index(&self) -> usize {
        (self.y * BOARD_WIDTH + self.x) as usize
    }

    /// All 60 squares in index order.
    pub fn all() -> impl Iterator<Item = Loc> {
        (0..BOARD_SIZE).map(Loc::from_index)
    }

    /// The neighbouring square in `dir`, if it is on the board.
    ///
    /// This is raw grid adjacency; whether the board's lines actually connect
    /// the two squares is answered by [`crate::core::map::is_direction_available`].
    pub fn offset(&self, dir: Dir) -> Option<Loc> {
        let (dx, dy) = dir.delta();
        let next = Loc::new(self.x + dx, self.y + dy);
        next.in_bounds().then_some(next)
    }

    /// Manhattan distance.
    pub fn dist(&self, other: &Loc) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(i32, i32)> for Loc {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Parses referee position names such as `E1` or `A12`.
impl FromStr for Loc {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let column = chars.next().context("Empty position name")?;
        let x = match COLUMN_NAMES.iter().position(|&c| c == column.to_ascii_uppercase()) {
            Some(x) => x as i32,
            None => bail!("Invalid column in position {}", s),
        };
        let row: i32 = chars.as_str().parse()
            .with_context(|| format!("Invalid row in position {}", s))?;

        let loc = Loc::new(x, row - 1);
        ensure!(loc.in_bounds(), "Position {} is off the board", s);
        Ok(loc)
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", COLUMN_NAMES[self.x as usize], self.y + 1)
    }
}

/// The eight compass directions. `Up` points towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Dir {
    /// Generation order of the move generator.
    pub const ALL: [Dir; 8] = [
        Dir::Up,
        Dir::Right,
        Dir::Down,
        Dir::Left,
        Dir::UpLeft,
        Dir::UpRight,
        Dir::DownLeft,
        Dir::DownRight,
    ];

    pub const ORTHOGONAL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::UpLeft => (-1, -1),
            Dir::UpRight => (1, -1),
            Dir::DownLeft => (-1, 1),
            Dir::DownRight => (1, 1),
        }
    }

    pub const fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::UpLeft => Dir::DownRight,
            Dir::UpRight => Dir::DownLeft,
            Dir::DownLeft => Dir::UpRight,
            Dir::DownRight => Dir::UpLeft,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// Slot of this direction in a legality row.
    pub const fn slot(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "E1")]
    #[test_case(4, "A1")]
    #[test_case(5, "E2")]
    #[test_case(29, "A6")]
    #[test_case(59, "A12")]
    fn test_position_names(index: usize, name: &str) {
        let loc = Loc::from_index(index);
        assert_eq!(loc.to_string(), name);
        assert_eq!(name.parse::<Loc>().unwrap(), loc);
        assert_eq!(loc.index(), index);
    }

    #[test_case("F1")]
    #[test_case("A0")]
    #[test_case("A13")]
    #[test_case("")]
    #[test_case("B")]
    fn test_invalid_position_names(name: &str) {
        assert!(name.parse::<Loc>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Loc::new(0, 0).offset(Dir::Up), None);
        assert_eq!(Loc::new(0, 0).offset(Dir::Left), None);
        assert_eq!(Loc::new(4, 11).offset(Dir::DownRight), None);
        assert_eq!(Loc::new(2, 3).offset(Dir::UpRight), Some(Loc::new(3, 2)));
    }

    #[test]
    fn test_inverse_round_trip() {
        for dir in Dir::ALL {
            assert_eq!(dir.inverse().inverse(), dir);
            let (dx, dy) = dir.delta();
            let (ix, iy) = dir.inverse().delta();
            assert_eq!((dx + ix, dy + iy), (0, 0));
        }
    }

    #[test]
    fn test_dist() {
        assert_eq!(Loc::new(0, 0).dist(&Loc::new(4, 11)), 15);
        assert_eq!(Loc::new(2, 5).dist(&Loc::new(2, 5)), 0);
    }
}
