pub mod board;
pub mod cli;
pub mod uci;

pub use board::{Board, Color, Move, Piece, Square};
