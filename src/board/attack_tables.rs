//! Offset tables shared by the attack oracle and the move generator.
//!
//! Squares are plain indices, so every step is a signed offset. An offset
//! can keep the index inside 0..63 while wrapping from one edge of the board
//! to the other; each table here carries the guard that rejects such steps.

use once_cell::sync::Lazy;

use super::{Color, Square};

/// A sliding step together with the source file it may not leave from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Direction {
    pub(crate) offset: i8,
    blocked_file: Option<u8>,
}

impl Direction {
    const fn new(offset: i8, blocked_file: Option<u8>) -> Self {
        Direction {
            offset,
            blocked_file,
        }
    }

    /// One step from `from`, or `None` at a board edge.
    #[inline]
    pub(crate) fn step(self, from: Square) -> Option<Square> {
        if self.blocked_file == Some(from.file()) {
            return None;
        }
        from.offset(self.offset)
    }

    /// Squares along the ray from `from`, nearest first, up to the edge.
    #[inline]
    pub(crate) fn ray(self, from: Square) -> impl Iterator<Item = Square> {
        std::iter::successors(self.step(from), move |&sq| self.step(sq))
    }
}

pub(crate) const NORTH: Direction = Direction::new(8, None);
pub(crate) const SOUTH: Direction = Direction::new(-8, None);
pub(crate) const EAST: Direction = Direction::new(1, Some(7));
pub(crate) const WEST: Direction = Direction::new(-1, Some(0));
pub(crate) const NORTH_EAST: Direction = Direction::new(9, Some(7));
pub(crate) const NORTH_WEST: Direction = Direction::new(7, Some(0));
pub(crate) const SOUTH_EAST: Direction = Direction::new(-7, Some(7));
pub(crate) const SOUTH_WEST: Direction = Direction::new(-9, Some(0));

pub(crate) const ROOK_DIRECTIONS: [Direction; 4] = [SOUTH, NORTH, WEST, EAST];
pub(crate) const BISHOP_DIRECTIONS: [Direction; 4] =
    [SOUTH_WEST, SOUTH_EAST, NORTH_WEST, NORTH_EAST];
pub(crate) const QUEEN_DIRECTIONS: [Direction; 8] = [
    SOUTH_WEST, SOUTH_EAST, NORTH_WEST, NORTH_EAST, SOUTH, NORTH, WEST, EAST,
];

/// Diagonal capture steps of a pawn of the given color, left capture first.
#[inline]
pub(crate) const fn pawn_captures(color: Color) -> [Direction; 2] {
    match color {
        Color::White => [NORTH_WEST, NORTH_EAST],
        Color::Black => [SOUTH_WEST, SOUTH_EAST],
    }
}

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Targets of a fixed-offset piece in offset order. A target is kept only if
/// it is on the board and its file is within `max_file_distance` of the
/// source file; anything further has wrapped around an edge.
fn leaper_targets(from: Square, offsets: &[i8], max_file_distance: u8) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&delta| from.offset(delta))
        .filter(|to| from.file().abs_diff(to.file()) <= max_file_distance)
        .collect()
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| leaper_targets(square_at(idx), &KNIGHT_OFFSETS, 2))
});

pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| leaper_targets(square_at(idx), &KING_OFFSETS, 1))
});

fn square_at(idx: usize) -> Square {
    Square::new(idx).unwrap_or_else(|| unreachable!("table index {idx} outside the board"))
}
