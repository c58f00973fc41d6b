use std::io::{self, Write};
use std::time::Duration;

use crate::board::SearchResult;

pub fn print_perft_info<W: Write>(
    out: &mut W,
    depth: usize,
    nodes: u64,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(
        out,
        "info string perft depth {} nodes {} time_ms {}",
        depth,
        nodes,
        elapsed.as_millis()
    )
}

/// Report a finished search as `info` then `bestmove`; `0000` when the
/// side to move has no legal move.
pub fn print_search_result<W: Write>(
    out: &mut W,
    depth: u32,
    result: Option<SearchResult>,
    elapsed: Duration,
) -> io::Result<()> {
    match result {
        Some(result) => {
            writeln!(
                out,
                "info depth {} score cp {} time {} pv {}",
                depth,
                result.score,
                elapsed.as_millis(),
                result.best_move
            )?;
            writeln!(out, "bestmove {}", result.best_move)
        }
        None => writeln!(out, "bestmove 0000"),
    }
}
