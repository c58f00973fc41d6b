use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, Move, MoveList, Piece, Square};

/// Files involved in one castling direction, on the castling side's back rank.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CastlePath {
    pub(crate) kingside: bool,
    pub(crate) king_to_file: u8,
    pub(crate) rook_from_file: u8,
    pub(crate) rook_to_file: u8,
    empty_files: &'static [u8],
    safe_files: [u8; 3],
}

pub(crate) const KING_HOME_FILE: u8 = 4;

pub(crate) const CASTLE_PATHS: [CastlePath; 2] = [
    CastlePath {
        kingside: true,
        king_to_file: 6,
        rook_from_file: 7,
        rook_to_file: 5,
        empty_files: &[5, 6],
        safe_files: [4, 5, 6],
    },
    CastlePath {
        kingside: false,
        king_to_file: 2,
        rook_from_file: 0,
        rook_to_file: 3,
        empty_files: &[1, 2, 3],
        safe_files: [4, 3, 2],
    },
];

/// The castling path a king move of `delta` squares corresponds to, if any.
#[inline]
pub(crate) fn castle_path_for(delta: i8) -> Option<&'static CastlePath> {
    match delta {
        2 => Some(&CASTLE_PATHS[0]),
        -2 => Some(&CASTLE_PATHS[1]),
        _ => None,
    }
}

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.push_leaper_moves(from, color, &KING_TARGETS[from.index()], moves);
        self.generate_castling_moves(from, color, moves);
    }

    /// Castling needs the right still set, the rook on its home square, the
    /// squares between king and rook empty, and the king's start, transit
    /// and destination squares all free of enemy attack.
    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let rank = color.back_rank();
        if from != Square::from_coords(rank, KING_HOME_FILE) {
            return;
        }
        let enemy = color.opponent();

        for path in &CASTLE_PATHS {
            if !self.castling_rights.has(color, path.kingside) {
                continue;
            }
            let rook_home = Square::from_coords(rank, path.rook_from_file);
            if self.piece_at(rook_home) != Some((color, Piece::Rook)) {
                continue;
            }
            let path_clear = path
                .empty_files
                .iter()
                .all(|&file| self.is_empty(Square::from_coords(rank, file)));
            if !path_clear {
                continue;
            }
            let path_safe = path
                .safe_files
                .iter()
                .all(|&file| !self.is_square_attacked(Square::from_coords(rank, file), enemy));
            if path_safe {
                moves.push(Move::new(from, Square::from_coords(rank, path.king_to_file)));
            }
        }
    }
}
