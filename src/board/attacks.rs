//! Square attack detection.

use super::attack_tables::{
    pawn_captures, Direction, BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS,
};
use super::{Board, Color, Piece, Square};

impl Board {
    /// True if any piece of `attacker` could capture on `square` next move,
    /// regardless of whose turn it is.
    ///
    /// This is the single source of truth for check detection and for
    /// castling transit safety.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // Pawns attacking `square` stand one diagonal step behind it, which is
        // a capture step of the defending color.
        let pawn_hit = pawn_captures(attacker.opponent())
            .into_iter()
            .filter_map(|dir| dir.step(square))
            .any(|from| self.piece_at(from) == Some((attacker, Piece::Pawn)));
        if pawn_hit {
            return true;
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((attacker, Piece::Knight)))
        {
            return true;
        }

        if self.slider_attacks(square, attacker, &ROOK_DIRECTIONS, Piece::Rook)
            || self.slider_attacks(square, attacker, &BISHOP_DIRECTIONS, Piece::Bishop)
        {
            return true;
        }

        KING_TARGETS[square.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((attacker, Piece::King)))
    }

    /// Walk each ray out from `square`; the first occupied square blocks the
    /// ray and is a hit if it holds `attacker`'s `slider` or queen.
    fn slider_attacks(
        &self,
        square: Square,
        attacker: Color,
        directions: &[Direction],
        slider: Piece,
    ) -> bool {
        directions.iter().any(|dir| {
            dir.ray(square)
                .find_map(|sq| self.piece_at(sq))
                .is_some_and(|(color, piece)| {
                    color == attacker && (piece == slider || piece == Piece::Queen)
                })
        })
    }

    /// True if `color`'s king is attacked.
    ///
    /// # Panics
    /// Panics if `color` has no king: a kingless position breaks the board
    /// invariants and cannot be searched.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self
            .find_king(color)
            .unwrap_or_else(|| panic!("{color} king missing from position"));
        self.is_square_attacked(king, color.opponent())
    }
}
