use std::process::ExitCode;

use clap::Parser;

mod cli;
mod cmd;
mod edges;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The negative `connected` answer is already on stdout.
            if !(cli.quiet && matches!(e, CliError::NotConnected { .. })) {
                eprintln!("{}", e.message());
            }
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Components { file } => {
            cmd::components::run(file, cli.format, cli.max_file_size, cli.verbose)
        }
        Command::Connected { file, a, b } => {
            cmd::connected::run(file, a, b, cli.format, cli.max_file_size, cli.verbose)
        }
        Command::Size { file, label } => {
            cmd::size::run(file, label, cli.format, cli.max_file_size, cli.verbose)
        }
        Command::Version => {
            println!("{}", unionfind_core::version());
            Ok(())
        }
    }
}
