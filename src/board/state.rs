use super::{CastlingRights, Color, Piece, Square};

/// State saved by `make_move` so `unmake_move` can restore the position.
///
/// `captured_square` differs from the move's destination only for en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) moved_piece: (Color, Piece),
    pub(crate) captured_piece: Option<(Color, Piece)>,
    pub(crate) captured_square: Square,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
}

/// Mailbox position: one slot per square, plus side to move, castling rights
/// and the en passant target.
///
/// A board is mutated in place by strictly nested `make_move`/`unmake_move`
/// pairs; it keeps no move history of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Reset to the standard starting layout with all castling rights.
    pub fn reset(&mut self) {
        self.squares = [None; 64];
        for (file, piece) in (0u8..).zip(BACK_RANK) {
            self.set_piece(Square::from_coords(0, file), Color::White, piece);
            self.set_piece(Square::from_coords(1, file), Color::White, Piece::Pawn);
            self.set_piece(Square::from_coords(6, file), Color::Black, Piece::Pawn);
            self.set_piece(Square::from_coords(7, file), Color::Black, piece);
        }
        self.side_to_move = Color::White;
        self.castling_rights = CastlingRights::all();
        self.en_passant_target = None;
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        self.squares[sq.index()] = None;
    }

    /// Occupant of a square, `None` when empty
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub(crate) fn color_on(&self, sq: Square) -> Option<Color> {
        self.squares[sq.index()].map(|(color, _)| color)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Scan the board for `color`'s king.
    ///
    /// Only a malformed position has no king; callers that need one treat
    /// `None` as fatal.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
