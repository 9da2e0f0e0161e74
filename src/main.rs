use std::process::ExitCode;

use clap::Parser;
use git_patchgen::cli::Cli;
use git_patchgen::logging::init::init_tracing;
use git_patchgen::run;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
