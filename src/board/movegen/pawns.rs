use super::super::attack_tables::pawn_captures;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Pushes, double pushes from the start rank, diagonal captures and en
    /// passant. Promotion needs no separate move: `make_move` queens a pawn
    /// that lands on the last rank.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let push = color.pawn_push();

        if let Some(single) = from.offset(push).filter(|&sq| self.is_empty(sq)) {
            moves.push(Move::new(from, single));

            if from.rank() == color.pawn_start_rank() {
                if let Some(double) = single.offset(push).filter(|&sq| self.is_empty(sq)) {
                    moves.push(Move::new(from, double));
                }
            }
        }

        for dir in pawn_captures(color) {
            let Some(to) = dir.step(from) else {
                continue;
            };
            let captures_enemy = self.color_on(to) == Some(color.opponent());
            if captures_enemy || self.en_passant_target == Some(to) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
