use super::movegen::{castle_path_for, CASTLE_PATHS};
use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

/// The castling right a rook standing on `sq` at the start of the game guards.
fn rook_home_right(sq: Square) -> Option<(Color, bool)> {
    Color::BOTH.into_iter().find_map(|color| {
        CASTLE_PATHS
            .iter()
            .find(|path| sq == Square::from_coords(color.back_rank(), path.rook_from_file))
            .map(|path| (color, path.kingside))
    })
}

impl Board {
    /// Play `m` in place and return what `unmake_move` needs to take it back.
    ///
    /// Handles the castling rook, en passant removal, automatic queening,
    /// castling-right loss and the new en passant target. `m` must come from
    /// this position's move generator.
    ///
    /// # Panics
    /// Panics if the source square is empty.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let (from, to) = (m.from(), m.to());
        let moved_piece = self
            .piece_at(from)
            .unwrap_or_else(|| panic!("make_move {m}: source square is empty"));
        let (color, piece) = moved_piece;

        let mut info = UnmakeInfo {
            moved_piece,
            captured_piece: self.piece_at(to),
            captured_square: to,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
        };

        // Anything landing on a rook home square ends that castling right
        if let Some((owner, kingside)) = rook_home_right(to) {
            self.castling_rights.remove(owner, kingside);
        }

        self.clear(from);
        self.set_piece(to, color, piece);

        let mut new_en_passant = None;

        match piece {
            Piece::King => {
                if let Some(path) = castle_path_for(m.delta()) {
                    let rank = from.rank();
                    let rook_from = Square::from_coords(rank, path.rook_from_file);
                    if self.piece_at(rook_from) == Some((color, Piece::Rook)) {
                        self.clear(rook_from);
                        self.set_piece(Square::from_coords(rank, path.rook_to_file), color, Piece::Rook);
                    }
                }
                self.castling_rights.remove_color(color);
            }
            Piece::Rook => {
                if let Some((owner, kingside)) = rook_home_right(from) {
                    if owner == color {
                        self.castling_rights.remove(color, kingside);
                    }
                }
            }
            Piece::Pawn => {
                let push = color.pawn_push();
                if self.en_passant_target == Some(to) {
                    if let Some(victim) = to.offset(-push) {
                        info.captured_square = victim;
                        info.captured_piece = self.piece_at(victim);
                        self.clear(victim);
                    }
                }
                if to.rank() == color.pawn_promotion_rank() {
                    self.set_piece(to, color, Piece::PROMOTION);
                }
                if m.delta() == 2 * push {
                    new_en_passant = from.offset(push);
                }
            }
            Piece::Knight | Piece::Bishop | Piece::Queen => {}
        }

        self.en_passant_target = new_en_passant;
        self.side_to_move = color.opponent();

        info
    }

    /// Take back `m`, restoring the exact position before `make_move`.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        let (from, to) = (m.from(), m.to());
        let (color, piece) = info.moved_piece;

        self.side_to_move = color;
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;

        self.set_piece(from, color, piece);
        self.clear(to);

        if piece == Piece::King {
            if let Some(path) = castle_path_for(m.delta()) {
                let rank = from.rank();
                let rook_to = Square::from_coords(rank, path.rook_to_file);
                if self.piece_at(rook_to) == Some((color, Piece::Rook)) {
                    self.clear(rook_to);
                    self.set_piece(Square::from_coords(rank, path.rook_from_file), color, Piece::Rook);
                }
            }
        }

        if let Some((captured_color, captured)) = info.captured_piece {
            self.set_piece(info.captured_square, captured_color, captured);
        }
    }
}
