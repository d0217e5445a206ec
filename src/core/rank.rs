use anyhow::Result;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use super::convert::{from_primitive, to_primitive, FromIndex, ToIndex};

/// Rank of the piece on a square, ordered by combat strength.
///
/// For enemy squares the rank is a lower bound on what the piece really is:
/// `Unknown` until a combat proves more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Rank {
    Empty = 0,
    Unknown = 1,
    Flag = 2,
    Landmine = 3,
    Bomb = 4,
    Engineer = 5,
    Lieutenant = 6,
    Captain = 7,
    Major = 8,
    Colonel = 9,
    BrigadierGeneral = 10,
    MajorGeneral = 11,
    General = 12,
    FieldMarshal = 13,
}

impl Rank {
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Flags, landmines and empty squares never move.
    pub fn is_immovable(self) -> bool {
        matches!(self, Rank::Empty | Rank::Flag | Rank::Landmine)
    }

    /// The next rank up, `None` above the field marshal.
    pub fn succ(self) -> Option<Rank> {
        Rank::from_i32(self.value() + 1)
    }

    /// Single character used by the referee protocol.
    pub fn to_code(self) -> char {
        match self {
            Rank::Empty => ' ',
            Rank::Unknown => 'U',
            Rank::Flag => 'F',
            Rank::Landmine => 'L',
            Rank::Bomb => 'B',
            Rank::Engineer => '1',
            Rank::Lieutenant => '2',
            Rank::Captain => '3',
            Rank::Major => '4',
            Rank::Colonel => '5',
            Rank::BrigadierGeneral => '6',
            Rank::MajorGeneral => '7',
            Rank::General => '8',
            Rank::FieldMarshal => '9',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            ' ' => Some(Rank::Empty),
            'U' => Some(Rank::Unknown),
            'F' => Some(Rank::Flag),
            'L' => Some(Rank::Landmine),
            'B' => Some(Rank::Bomb),
            d @ '1'..='9' => Rank::from_u32(d as u32 - '1' as u32 + Rank::Engineer as u32),
            _ => None,
        }
    }
}

impl FromIndex for Rank {
    fn from_index(idx: usize) -> Result<Self> {
        from_primitive(idx, "rank")
    }
}

impl ToIndex for Rank {
    fn to_index(&self) -> Result<usize> {
        to_primitive(self, "rank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Rank::Unknown, 'U')]
    #[test_case(Rank::Flag, 'F')]
    #[test_case(Rank::Landmine, 'L')]
    #[test_case(Rank::Bomb, 'B')]
    #[test_case(Rank::Engineer, '1')]
    #[test_case(Rank::Colonel, '5')]
    #[test_case(Rank::FieldMarshal, '9')]
    fn test_codes(rank: Rank, code: char) {
        assert_eq!(rank.to_code(), code);
        assert_eq!(Rank::from_code(code), Some(rank));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Rank::from_code('0'), None);
        assert_eq!(Rank::from_code('X'), None);
    }

    #[test]
    fn test_succ() {
        assert_eq!(Rank::Engineer.succ(), Some(Rank::Lieutenant));
        assert_eq!(Rank::General.succ(), Some(Rank::FieldMarshal));
        assert_eq!(Rank::FieldMarshal.succ(), None);
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..=13 {
            assert_eq!(Rank::from_index(idx).unwrap().to_index().unwrap(), idx);
        }
        assert!(Rank::from_index(14).is_err());
    }

    #[test]
    fn test_immovable() {
        assert!(Rank::Flag.is_immovable());
        assert!(Rank::Landmine.is_immovable());
        assert!(Rank::Empty.is_immovable());
        assert!(!Rank::Bomb.is_immovable());
        assert!(!Rank::Unknown.is_immovable());
    }
}
