use super::super::Board;
use super::MATE_SCORE;

impl Board {
    /// Plain minimax with the same leaf and terminal rules as `search` but no
    /// pruning. Exponentially slower; it exists to check that pruning never
    /// changes a score.
    pub fn minimax(&mut self, depth: u32) -> i32 {
        if depth == 0 {
            return self.evaluate();
        }

        let moves = self.generate_moves();
        if moves.is_empty() {
            return self.terminal_score();
        }

        let maximizing = self.white_to_move();
        let mut best_score = if maximizing { -MATE_SCORE } else { MATE_SCORE };
        for m in moves {
            let info = self.make_move(m);
            let score = self.minimax(depth - 1);
            self.unmake_move(m, info);
            best_score = if maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }
        best_score
    }
}
