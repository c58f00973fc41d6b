//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use simple_engine::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.game_status(), GameStatus::InProgress);
//! ```

pub use super::{
    Board, CastlingRights, Color, FenError, GameStatus, Move, MoveList, MoveParseError, Piece,
    SearchResult, Square, SquareError, MATE_SCORE,
};
