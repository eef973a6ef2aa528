use std::process::ExitCode;

use clap::Parser;

use claunch::args::Args;
use claunch::commands;

fn main() -> ExitCode {
    let args = Args::parse();

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
