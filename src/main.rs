use std::process::ExitCode;

use simple_engine::{cli, uci};

fn main() -> ExitCode {
    let interactive = std::env::args().nth(1).is_some_and(|arg| arg == "cli");
    let result = if interactive {
        cli::run_cli_loop()
    } else {
        uci::run_uci_loop()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
