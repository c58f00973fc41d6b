use std::env;
use std::process::ExitCode;

use simple_engine::board::{Board, GameStatus};
use simple_engine::uci::{format_uci_move, try_parse_position_command};

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.first().is_some_and(|a| a == "-h" || a == "--help") {
        eprintln!("usage: game_status [--fen \"<fen>\"] <move1> <move2> ...");
        return ExitCode::SUCCESS;
    }

    let mut parts: Vec<&str> = vec!["position"];
    let fen = if args.first().is_some_and(|a| a == "--fen") {
        if args.len() < 2 {
            eprintln!("--fen needs a position");
            return ExitCode::FAILURE;
        }
        let fen = args.remove(1);
        args.remove(0);
        Some(fen)
    } else {
        None
    };
    match &fen {
        Some(fen) => {
            parts.push("fen");
            parts.extend(fen.split_whitespace());
        }
        None => parts.push("startpos"),
    }
    parts.push("moves");
    parts.extend(args.iter().map(String::as_str));

    let mut board = Board::new();
    if let Err(e) = try_parse_position_command(&mut board, &parts) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let legal_moves = board.generate_moves();
    let status = board.game_status();
    println!(
        "side_to_move: {}",
        if board.white_to_move() { "white" } else { "black" }
    );
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", status == GameStatus::Checkmate);
    println!("stalemate: {}", status == GameStatus::Stalemate);
    for mv in &legal_moves {
        println!("{}", format_uci_move(mv));
    }
    ExitCode::SUCCESS
}
