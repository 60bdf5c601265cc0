//! The two strategies a cell can play.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy held by a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Strategy {
    /// Cooperate, written as `.`.
    Cooperate = 0,
    /// Compete, written as `X`.
    Compete = 1,
}

impl Strategy {
    /// Both strategies, in discriminant order.
    pub const ALL: [Strategy; 2] = [Strategy::Cooperate, Strategy::Compete];

    /// The other strategy.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Strategy::Cooperate => Strategy::Compete,
            Strategy::Compete => Strategy::Cooperate,
        }
    }

    /// Glyph used in grid files and printed grids.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Strategy::Cooperate => '.',
            Strategy::Compete => 'X',
        }
    }

    /// Parse a grid-file byte. Anything other than `.` or `X` is not a cell.
    #[must_use]
    pub const fn from_glyph(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(Strategy::Cooperate),
            b'X' => Some(Strategy::Compete),
            _ => None,
        }
    }

    /// Index into two-by-two tables keyed by strategy.
    #[must_use]
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for s in Strategy::ALL {
            assert_ne!(s.opposite(), s);
            assert_eq!(s.opposite().opposite(), s);
        }
    }

    #[test]
    fn test_glyph_round_trip() {
        for s in Strategy::ALL {
            let byte = u8::try_from(s.glyph()).unwrap();
            assert_eq!(Strategy::from_glyph(byte), Some(s));
        }
        assert_eq!(Strategy::from_glyph(b'x'), None);
        assert_eq!(Strategy::from_glyph(b' '), None);
    }

    #[test]
    fn test_index_matches_discriminant() {
        assert_eq!(Strategy::Cooperate.index(), 0);
        assert_eq!(Strategy::Compete.index(), 1);
    }
}
