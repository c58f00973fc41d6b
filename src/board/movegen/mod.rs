mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::{castle_path_for, CASTLE_PATHS};

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Move, MoveList, Piece, Square};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate,
    Stalemate,
}

impl Board {
    /// Moves that obey each piece's movement rules, without checking whether
    /// the mover's king is left attacked.
    ///
    /// Squares are visited a1..h8 and each piece emits its moves in a fixed
    /// offset order; the search's tie-breaking depends on this order.
    #[must_use]
    pub fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for from in Square::all() {
            let Some((owner, piece)) = self.piece_at(from) else {
                continue;
            };
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
                Piece::Bishop => {
                    self.generate_slider_moves(from, color, &BISHOP_DIRECTIONS, &mut moves);
                }
                Piece::Rook => {
                    self.generate_slider_moves(from, color, &ROOK_DIRECTIONS, &mut moves);
                }
                Piece::Queen => {
                    self.generate_slider_moves(from, color, &QUEEN_DIRECTIONS, &mut moves);
                }
                Piece::King => self.generate_king_moves(from, color, &mut moves),
            }
        }
        moves
    }

    fn push_leaper_moves(&self, from: Square, color: Color, targets: &[Square], moves: &mut MoveList) {
        for &to in targets {
            if self.color_on(to) != Some(color) {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Legal moves: each pseudo-legal move is made, the mover's king is
    /// tested for attack, and the move is unmade again.
    pub fn generate_moves(&mut self) -> MoveList {
        let mover = self.side_to_move;
        let pseudo_moves = self.generate_pseudo_moves();
        let mut legal_moves = MoveList::new();

        for m in pseudo_moves {
            let info = self.make_move(m);
            let king_safe = !self.is_in_check(mover);
            self.unmake_move(m, info);
            if king_safe {
                legal_moves.push(m);
            }
        }
        legal_moves
    }

    pub fn game_status(&mut self) -> GameStatus {
        if !self.generate_moves().is_empty() {
            GameStatus::InProgress
        } else if self.is_in_check(self.side_to_move) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.game_status() == GameStatus::Checkmate
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.game_status() == GameStatus::Stalemate
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let info = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m, info);
        }

        nodes
    }
}
