#![forbid(unsafe_code)]

//! # pendulum-sim
//!
//! Headless double pendulum driver. See [`pendulum_cli`] for the commands.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use pendulum_cli::cli::Cli;
use pendulum_cli::{Outcome, execute, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match execute(&cli, &mut out) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::DriftExceeded) => ExitCode::from(2),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
