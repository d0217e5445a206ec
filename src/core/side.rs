use anyhow::{bail, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use super::convert::{from_primitive, to_primitive, FromIndex, ToIndex};
use super::loc::BOARD_HEIGHT;
use std::{fmt::Display, str::FromStr};
use std::ops::{Index, IndexMut, Not};

/// Side of the board, from this agent's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Side {
    Ally,
    Enemy,
}

impl Side {
    /// Rows `0..=5` belong to the ally, rows `6..=11` to the enemy.
    pub fn owns_row(self, y: i32) -> bool {
        match self {
            Side::Ally => (0..6).contains(&y),
            Side::Enemy => (6..12).contains(&y),
        }
    }

    /// Row holding the side's headquarters.
    pub fn back_row(self) -> i32 {
        match self {
            Side::Ally => 0,
            Side::Enemy => BOARD_HEIGHT - 1,
        }
    }
}

impl FromIndex for Side {
    fn from_index(idx: usize) -> Result<Self> {
        from_primitive(idx, "side")
    }
}

impl ToIndex for Side {
    fn to_index(&self) -> Result<usize> {
        to_primitive(self, "side")
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Side::Ally => Side::Enemy,
            Side::Enemy => Side::Ally,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Ally => write!(f, "ally"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// Player number used by the referee, `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerNumber(u8);

impl PlayerNumber {
    pub const ONE: PlayerNumber = PlayerNumber(1);
    pub const TWO: PlayerNumber = PlayerNumber(2);

    /// Which side `self` plays when this agent is `me`.
    pub fn side(self, me: PlayerNumber) -> Side {
        if self == me {
            Side::Ally
        } else {
            Side::Enemy
        }
    }
}

impl FromStr for PlayerNumber {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(PlayerNumber::ONE),
            "2" => Ok(PlayerNumber::TWO),
            _ => bail!("Invalid player number: {}", s),
        }
    }
}

impl Display for PlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Array indexed by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideArray<T> {
    pub values: [T; 2],
}

impl<T> SideArray<T> {
    pub const fn new(ally: T, enemy: T) -> Self {
        Self {
            values: [ally, enemy],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T> Index<Side> for SideArray<T> {
    type Output = T;

    fn index(&self, index: Side) -> &Self::Output {
        &self.values[index as usize]
    }
}

impl<T> IndexMut<Side> for SideArray<T> {
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        &mut self.values[index as usize]
    }
}
