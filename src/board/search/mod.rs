//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Scores are always from White's point of view: White maximizes, Black
//! minimizes. There is no move ordering, quiescence or transposition table;
//! the move generator's order is searched as is.

mod minimax;

use super::{Board, Move};

/// Score of a checkmated position, negated when White is the side mated.
///
/// The magnitude is the same in both directions and does not depend on the
/// ply at which the mate occurs.
pub const MATE_SCORE: i32 = 99_999;

/// Best move at the root together with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
}

impl Board {
    /// Alpha-beta minimax to `depth` plies below this position.
    pub fn search(&mut self, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
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
            let score = self.search(depth - 1, alpha, beta);
            self.unmake_move(m, info);

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        best_score
    }

    /// Score of a position with no legal moves: mate if the side to move is
    /// in check, otherwise stalemate.
    pub(crate) fn terminal_score(&self) -> i32 {
        if self.is_in_check(self.side_to_move) {
            -self.side_to_move.sign() * MATE_SCORE
        } else {
            0
        }
    }

    /// Search every legal root move and keep the best one.
    ///
    /// Ties go to the move generated first. A depth of 0 is searched as 1.
    /// Returns `None` when the side to move has no legal move.
    pub fn search_root(&mut self, depth: u32) -> Option<SearchResult> {
        let depth = depth.max(1);
        let maximizing = self.white_to_move();
        let (mut alpha, mut beta) = (-MATE_SCORE, MATE_SCORE);
        let mut best: Option<SearchResult> = None;

        for m in self.generate_moves() {
            let info = self.make_move(m);
            let score = self.search(depth - 1, alpha, beta);
            self.unmake_move(m, info);
            log::trace!("root {m} scored {score}");

            let improves = best.map_or(true, |b| {
                if maximizing {
                    score > b.score
                } else {
                    score < b.score
                }
            });
            if improves {
                best = Some(SearchResult {
                    best_move: m,
                    score,
                });
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        if let Some(result) = best {
            log::debug!(
                "depth {depth} best {} score {}",
                result.best_move,
                result.score
            );
        }
        best
    }

    /// Best move for the side to move at a fixed depth.
    pub fn find_best_move(&mut self, depth: u32) -> Option<Move> {
        self.search_root(depth).map(|result| result.best_move)
    }
}
