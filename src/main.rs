use clap::Parser;
use cstubgen::cli::Cli;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args = Cli::parse();

    if let Err(e) = cstubgen::logging::init() {
        eprintln!("{e:#}");
    }

    match cstubgen::run(&args) {
        Ok(summary) if summary.had_errors() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
