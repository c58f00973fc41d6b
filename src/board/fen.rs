use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Only the first four fields are read; the move clocks are not tracked
    /// and may be omitted.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.into_iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square::from_coords(rank, file as u8), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant_target = match parts[3] {
            "-" => None,
            square => Some(square.parse().map_err(|_| FenError::InvalidEnPassant {
                found: square.to_string(),
            })?),
        };

        for color in Color::BOTH {
            if board.find_king(color).is_none() {
                return Err(FenError::MissingKing { color });
            }
        }

        let waiting = board.side_to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    ///
    /// The clocks are always written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::from_coords(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move() { "w" } else { "b" };
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }

    /// Parse a move in coordinate notation (e.g. "e2e4") and check that it
    /// is legal here.
    ///
    /// # Example
    /// ```
    /// use simple_engine::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv: Move = text.parse()?;
        if self.generate_moves().contains(mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Parse a move and make it on the board in one call.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_fen_round_trip() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.en_passant_target, Some("e3".parse().unwrap()));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_clocks_are_optional() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert!(board.castling_rights.is_empty());
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidPiece { char: 'x' }));
    }

    #[test]
    fn test_fen_error_rank_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidRank { rank: 7 }));
    }

    #[test]
    fn test_fen_error_too_many_files() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::TooManyFiles { rank: 2, .. })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidCastling { char: 'X' }));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_missing_king() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            result,
            Err(FenError::MissingKing {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_fen_rejects_side_not_to_move_in_check() {
        let result = Board::try_from_fen("4k3/4R3/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            result,
            Err(FenError::OpponentInCheck {
                color: Color::Black
            })
        );
        // the same position is fine with the checked side to move
        let mut board = Board::try_from_fen("4k3/4R3/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert!(board.is_in_check(Color::Black));
        assert!(!board.generate_moves().is_empty());
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        assert!(board.castling_rights.has(Color::White, true));
        assert!(!board.castling_rights.has(Color::White, false));
        assert!(!board.castling_rights.has(Color::Black, true));
        assert!(board.castling_rights.has(Color::Black, false));
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), "e2".parse().unwrap());
        assert_eq!(mv.to(), "e4".parse().unwrap());
    }

    #[test]
    fn test_parse_move_error_invalid_length() {
        let mut board = Board::new();
        let result = board.parse_move("e2");
        assert!(matches!(result, Err(MoveParseError::InvalidLength { .. })));
    }

    #[test]
    fn test_parse_move_error_invalid_square() {
        let mut board = Board::new();
        let result = board.parse_move("z9z9");
        assert!(matches!(result, Err(MoveParseError::InvalidSquare { .. })));
    }

    #[test]
    fn test_parse_move_error_illegal() {
        let mut board = Board::new();
        let result = board.parse_move("e2e5");
        assert!(matches!(result, Err(MoveParseError::IllegalMove { .. })));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert!(board.white_to_move());
    }

    #[test]
    fn test_make_move_uci() {
        let mut board = Board::new();
        board.make_move_uci("e2e4").unwrap();
        assert!(!board.white_to_move());
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}
