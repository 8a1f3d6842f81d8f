//! `zak64` command-line entry point.
//!
//! Parses arguments, sets up logging and hands off to the subcommand. Library
//! errors are mapped to their exit status so that a signature mismatch can be
//! told apart from other decode failures.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zak64_lfl::LflError;
use zak64_lfl::error::EXIT_DECODE_FAILURE;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.level().as_str())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::LflExtract(args) => commands::extract::handle(&args),
        Commands::Rooms(images) => commands::rooms::handle(&images),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<LflError>()
        .map_or(EXIT_DECODE_FAILURE, LflError::exit_code)
}
