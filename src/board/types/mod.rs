//! Core chess types.
//!
//! This module contains the fundamental types used throughout the chess engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - board square as an index 0..63
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{piece_value, Color, Piece};
pub use square::Square;
