use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.push_leaper_moves(from, color, &KNIGHT_TARGETS[from.index()], moves);
    }
}
