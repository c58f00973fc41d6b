//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Handles communication with chess GUIs following the UCI specification.
//! Searches run synchronously at a fixed depth, so there is no `stop`.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::board::{Board, FenError, Move, MoveParseError, SearchResult};

pub mod command;
pub mod options;
pub mod print;

use command::{parse_uci_command, UciCommand};
use options::{parse_setoption, UciOptions};
use print::{print_perft_info, print_search_result};

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UciError::InvalidFen(e) => Some(e),
            UciError::InvalidMove { error, .. } => Some(error),
            UciError::MissingParts => None,
        }
    }
}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a move in UCI format (e.g., "e2e4"). Returns `None` if the move is
/// malformed or illegal.
#[must_use]
pub fn parse_uci_move(board: &mut Board, uci_string: &str) -> Option<Move> {
    board.parse_move(uci_string).ok()
}

/// Parse a UCI position command, returning an error on failure.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". Move tokens shorter
/// than four characters are skipped. The first illegal move stops the
/// list; the moves before it stay applied.
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let moves_at = parts.iter().position(|&p| p == "moves");
    let setup = &parts[..moves_at.unwrap_or(parts.len())];

    match setup.get(1).copied() {
        Some("startpos") => *board = Board::new(),
        Some("fen") if setup.len() > 2 => {
            let fen = setup[2..].join(" ");
            *board = Board::try_from_fen(&fen)?;
        }
        _ => return Err(UciError::MissingParts),
    }

    let Some(moves_at) = moves_at else {
        return Ok(());
    };
    for &text in &parts[moves_at + 1..] {
        if text.len() < 4 {
            continue;
        }
        board.make_move_uci(text).map_err(|e| UciError::InvalidMove {
            move_str: text.to_string(),
            error: e,
        })?;
    }

    Ok(())
}

/// Parse a UCI position command, printing errors to stderr on failure.
///
/// This is a convenience wrapper around `try_parse_position_command` for
/// use in the main UCI loop where errors should be logged but not propagated.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        log::warn!("position command rejected: {e}");
        eprintln!("Error: {e}");
    }
}

#[must_use]
pub fn format_uci_move(mv: &Move) -> String {
    mv.to_string()
}

/// One engine instance speaking UCI: the current position and options.
#[derive(Debug, Clone, Default)]
pub struct UciSession {
    board: Board,
    options: UciOptions,
}

impl UciSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one command, writing any reply to `out`. Returns `false`
    /// once the session should end.
    pub fn handle_command<W: Write>(&mut self, cmd: UciCommand, out: &mut W) -> io::Result<bool> {
        match cmd {
            UciCommand::Uci => self.options.print(out)?,
            UciCommand::IsReady => writeln!(out, "readyok")?,
            UciCommand::UciNewGame => self.board = Board::new(),
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut self.board, &parts);
            }
            UciCommand::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let depth = self.options.go_depth(&parts);
                let start = Instant::now();
                let result = self.board.search_root(depth).map(|r| SearchResult {
                    score: if self.board.white_to_move() { r.score } else { -r.score },
                    ..r
                });
                print_search_result(out, depth, result, start.elapsed())?;
            }
            UciCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = self.board.perft(depth);
                print_perft_info(out, depth, nodes, start.elapsed())?;
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                if let Some((name, value)) = parse_setoption(&parts) {
                    self.options.apply_setoption(&name, value.as_deref());
                }
            }
            UciCommand::Quit => return Ok(false),
            UciCommand::Unknown(line) => log::warn!("ignoring unknown command '{line}'"),
        }
        out.flush()?;
        Ok(true)
    }
}

/// Drive a session from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut session = UciSession::new();
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };
        if !session.handle_command(cmd, out)? {
            break;
        }
    }
    Ok(())
}

/// Run the UCI protocol on stdin/stdout.
pub fn run_uci_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout)
}
