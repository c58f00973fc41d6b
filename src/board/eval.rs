use super::pst::{KNIGHT_TABLE, PAWN_TABLE};
use super::{Board, Color, Piece, Square};

/// Positional bonus for a piece, mirroring the square for Black.
#[inline]
fn positional_bonus(color: Color, piece: Piece, sq: Square) -> i32 {
    let table = match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        _ => return 0,
    };
    let idx = match color {
        Color::White => sq.index(),
        Color::Black => sq.mirror().index(),
    };
    table[idx]
}

impl Board {
    /// Static score in centipawns, positive when White is better.
    ///
    /// Material for every piece plus the pawn and knight square tables.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
            .map(|(sq, color, piece)| {
                color.sign() * (piece.value() + positional_bonus(color, piece, sq))
            })
            .sum()
    }
}
