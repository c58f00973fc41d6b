//! Chess board representation and game logic.
//!
//! A 64-slot mailbox board with pseudo-legal move generation, a
//! make/unmake legality filter, a material plus piece-square evaluator and
//! a fixed-depth alpha-beta search. Promotions always produce a queen.
//!
//! # Example
//! ```
//! use simple_engine::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod attacks;
mod display;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError};
pub use movegen::GameStatus;
pub use state::{Board, UnmakeInfo};
pub use types::{
    piece_value, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
};

// Public API - search
pub use search::{SearchResult, MATE_SCORE};
