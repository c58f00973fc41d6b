//! Interactive play in the terminal: the human has White, the engine Black.

use std::io::{self, BufRead, Write};

use crate::board::{Board, GameStatus, MoveParseError};

/// Depth the engine searches at when replying.
pub const ENGINE_DEPTH: u32 = 3;

/// Play a game reading White's moves from `input`. Ends on mate,
/// stalemate, `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut board = Board::new();
    let mut lines = input.lines();

    loop {
        writeln!(out, "{board}")?;

        match board.game_status() {
            GameStatus::Checkmate => {
                writeln!(out, "Checkmate.")?;
                return Ok(());
            }
            GameStatus::Stalemate => {
                writeln!(out, "Stalemate.")?;
                return Ok(());
            }
            GameStatus::InProgress => {}
        }

        if !board.white_to_move() {
            let Some(mv) = board.find_best_move(ENGINE_DEPTH) else {
                return Ok(());
            };
            writeln!(out, "Engine plays {mv}")?;
            board.make_move(mv);
            continue;
        }

        write!(out, "Your move: ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let line = line.trim();

        if line == "quit" {
            return Ok(());
        } else if line == "startpos" {
            board = Board::new();
        } else if let Some(fen) = line.strip_prefix("fen ") {
            match Board::try_from_fen(fen) {
                Ok(loaded) => board = loaded,
                Err(e) => writeln!(out, "Invalid FEN: {e}")?,
            }
        } else {
            match board.make_move_uci(line) {
                Ok(_) => {}
                Err(MoveParseError::IllegalMove { .. }) => writeln!(out, "Illegal move.")?,
                Err(e) => {
                    log::warn!("rejected move text '{line}': {e}");
                    writeln!(out, "Invalid move format.")?;
                }
            }
        }
    }
}

/// Play on stdin/stdout.
pub fn run_cli_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout)
}
