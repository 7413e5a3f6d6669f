//! Binary entrypoint for the `projgen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match projgen::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
