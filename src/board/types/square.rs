//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board as an index 0..63 (a1=0, b1=1, ..., h8=63).
///
/// `file = index % 8`, `rank = index / 8`, rank 0 being White's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from an index, `None` when outside 0..63
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from rank and file (both 0-7)
    #[inline]
    #[must_use]
    pub const fn from_coords(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    /// Square index as usize, for array access
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Mirror the square through the board centre (a1 <-> h8)
    #[inline]
    #[must_use]
    pub const fn mirror(self) -> Self {
        Square(63 - self.0)
    }

    /// Add a signed offset, `None` if the result leaves 0..63.
    ///
    /// This is a bounds check only; it does not catch rank wrap-around.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i16 + delta as i16;
        if (0..64).contains(&target) {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Iterate all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::IndexOutOfRange { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let &[file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Ok(Square::from_coords(rank - b'1', file - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!("a1".parse::<Square>().unwrap().index(), 0);
        assert_eq!("h8".parse::<Square>().unwrap().index(), 63);
        assert_eq!(Square::try_from(63).unwrap().to_string(), "h8");
        assert_eq!(Square::try_from(0).unwrap().to_string(), "a1");
    }

    #[test]
    fn every_index_round_trips_through_text() {
        for sq in Square::all() {
            let text = sq.to_string();
            assert_eq!(text.parse::<Square>(), Ok(sq));
        }
    }

    #[test]
    fn malformed_notation_is_rejected() {
        for bad in ["", "a", "a9", "i1", "a0", "e22", "E2", "2e"] {
            assert_eq!(
                bad.parse::<Square>(),
                Err(SquareError::InvalidNotation {
                    notation: bad.to_string()
                }),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(
            Square::try_from(64),
            Err(SquareError::IndexOutOfRange { index: 64 })
        );
    }

    #[test]
    fn offset_is_bounds_checked() {
        let a1 = Square::from_coords(0, 0);
        assert_eq!(a1.offset(-1), None);
        assert_eq!(a1.offset(8), Some(Square::from_coords(1, 0)));
        // Index stays in range even though the step wraps to the h-file
        assert_eq!(Square::from_coords(1, 0).offset(-1), Some(Square::from_coords(0, 7)));
    }
}
