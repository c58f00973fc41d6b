use super::super::attack_tables::Direction;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Walk each direction until the edge or the first occupied square,
    /// which is included as a capture when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[Direction],
        moves: &mut MoveList,
    ) {
        for dir in directions {
            for to in dir.ray(from) {
                match self.color_on(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(owner) => {
                        if owner != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
