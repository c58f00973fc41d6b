use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use simple_engine::board::Board;
use simple_engine::uci::{parse_position_command, parse_uci_move};

/// Feed `script` to the engine binary and collect stdout up to the first
/// `bestmove` line (or end of output).
fn run_until_bestmove(script: &[u8]) -> (String, Option<String>) {
    let exe = env!("CARGO_BIN_EXE_simple_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin.write_all(script).unwrap();

    let mut output = String::new();
    let mut bestmove_line = None;
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        output.push_str(&line);
        if line.starts_with("bestmove") {
            bestmove_line = Some(line);
            break;
        }
    }

    let _ = stdin.write_all(b"quit\n");
    drop(stdin);
    let _ = child.wait();
    (output, bestmove_line)
}

#[test]
fn uci_smoke_test_returns_legal_move() {
    let (output, bestmove_line) =
        run_until_bestmove(b"uci\nisready\nposition startpos moves e2e4\ngo depth 2\n");

    assert!(output.contains("id name simple_engine"));
    assert!(output.contains("uciok"));
    assert!(output.contains("readyok"));
    assert!(output.contains("info depth 2"));

    let bestmove = bestmove_line.expect("no bestmove found");
    let parts: Vec<&str> = bestmove.split_whitespace().collect();
    assert!(parts.len() >= 2, "bestmove missing move: {}", bestmove);
    let mv = parts[1];
    assert_ne!(mv, "0000", "engine returned null move");

    let mut board = Board::new();
    let parts = ["position", "startpos", "moves", "e2e4"];
    parse_position_command(&mut board, &parts);

    let legal = parse_uci_move(&mut board, mv).is_some();
    assert!(legal, "bestmove not legal in position: {}", mv);
}

#[test]
fn uci_reports_options_and_handles_setoption() {
    let exe = env!("CARGO_BIN_EXE_simple_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let input = b"uci\nsetoption name Hash value 32\nsetoption name Depth value 1\nisready\nquit\n";
    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("option name Hash"));
    assert!(stdout.contains("option name Depth type spin default 3 min 1 max 4"));
    assert!(stdout.contains("readyok"));
}

#[test]
fn uci_finds_mate_in_one() {
    let (_, bestmove_line) = run_until_bestmove(
        b"position fen 6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1\ngo depth 2\n",
    );
    assert_eq!(bestmove_line.as_deref().map(str::trim), Some("bestmove e1e8"));
}

#[test]
fn uci_reports_null_move_when_mated() {
    let (_, bestmove_line) = run_until_bestmove(
        b"position startpos moves f2f3 e7e5 g2g4 d8h4\ngo depth 3\n",
    );
    assert_eq!(bestmove_line.as_deref().map(str::trim), Some("bestmove 0000"));
}

#[test]
fn uci_perft_command_outputs_nodes() {
    let exe = env!("CARGO_BIN_EXE_simple_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let input = b"position startpos\nperft 2\nquit\n";
    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout
            .lines()
            .any(|l| l.contains("perft depth 2") && l.contains("nodes 400")),
        "perft output missing: {stdout}"
    );
}

#[test]
fn cli_mode_plays_a_reply() {
    let exe = env!("CARGO_BIN_EXE_simple_engine");
    let mut child = Command::new(exe)
        .arg("cli")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"e2e4\nquit\n")
        .unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("   a b c d e f g h"));
    assert!(stdout.contains("Engine plays "));
}
