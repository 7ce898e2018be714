//! Command-line interface for `pendulum-sim`.
//!
//! # Examples
//!
//! ```bash
//! # Print the default preset as a starting point
//! pendulum-sim config > pendulum.toml
//!
//! # Stream every 10th frame of a 5 second run as JSON lines
//! pendulum-sim run --config pendulum.toml --steps 5000 --every 10
//!
//! # Check energy drift and fail above 0.5%
//! pendulum-sim energy --steps 10000 --max-drift 0.005
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Headless double pendulum driver.
///
/// Steps the simulation the way an animation loop would and reports what
/// a renderer would draw, without drawing it.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pendulum-sim",
    author,
    version,
    about = "Headless double pendulum driver",
    long_about = "Steps a double pendulum with fixed-size RK4 ticks and prints \
                  trajectories or energy diagnostics."
)]
pub struct Cli {
    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    ///
    /// `RUST_LOG` takes precedence when set
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Simulate and print frames
    Run(RunArgs),

    /// Simulate and report energy drift
    Energy(EnergyArgs),

    /// Print the default configuration as TOML
    Config,
}

/// Options shared by every simulating subcommand.
#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Configuration file (.toml or .json)
    ///
    /// Every field is required. Without a file the default preset is used:
    /// unit masses and rods released horizontally from rest
    #[arg(long, short = 'c', env = "PENDULUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of integrator steps
    #[arg(long, short = 'n', default_value_t = 1000, env = "PENDULUM_STEPS")]
    pub steps: u64,

    /// Override the integration time step
    #[arg(long)]
    pub dt: Option<f64>,

    /// Override gravitational acceleration
    #[arg(long, short = 'g')]
    pub gravity: Option<f64>,

    /// Reject degenerate configurations instead of simulating them
    ///
    /// Zero lengths or masses otherwise produce NaN output
    #[arg(long)]
    pub validate: bool,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Print one frame every N steps
    #[arg(long, short = 'e', default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub every: u64,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug, Clone)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Fail when the drift relative to the energy scale exceeds this
    #[arg(long)]
    pub max_drift: Option<f64>,
}

/// Frame output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Whitespace-aligned text columns
    Plain,
}
