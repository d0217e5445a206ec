//! Core game representations and rules

pub mod board;
pub mod convert;
pub mod display;
pub mod loc;
pub mod map;
pub mod outcome;
pub mod rank;
pub mod side;

pub use board::{Board, Square};
pub use convert::{FromIndex, ToIndex};
pub use loc::{Dir, Loc};
pub use outcome::MoveResult;
pub use rank::Rank;
pub use side::{PlayerNumber, Side, SideArray};
