#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! # Pendulum CLI
//!
//! Headless host for the [`pendulum`] crate. It drives the simulation the
//! way an animation loop would and prints what a renderer would draw.
//!
//! ## Usage
//!
//! ```bash
//! pendulum-sim config > pendulum.toml       # Write the default preset
//! pendulum-sim run -c pendulum.toml -n 500  # Stream frames as JSON lines
//! pendulum-sim energy --max-drift 0.01      # Check energy conservation
//! ```

pub mod cli;
pub mod logging;
pub mod settings;
pub mod simulation;

use std::io::Write;

use anyhow::Context;
use tracing::{info, warn};

use crate::cli::{Cli, Command, OutputFormat};
use crate::simulation::{EnergyReport, PLAIN_HEADER, Trajectory};

/// How a successful invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything passed.
    Success,
    /// `energy --max-drift` was exceeded.
    DriftExceeded,
}

/// Runs the parsed command, writing results to `out`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or validated, or
/// if writing to `out` fails.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<Outcome> {
    let mut outcome = Outcome::Success;
    match &cli.command {
        Command::Config => {
            let text = settings::default_config_toml().context("failed to render default config")?;
            out.write_all(text.as_bytes())?;
        }
        Command::Run(args) => {
            let mut pendulum = args.sim.build()?;
            info!(steps = args.sim.steps, every = args.every, "running simulation");

            if args.format == OutputFormat::Plain {
                writeln!(out, "{PLAIN_HEADER}")?;
            }
            for frame in Trajectory::new(&mut pendulum, args.sim.steps, args.every) {
                frame
                    .write_to(out, args.format)
                    .context("failed to write frame")?;
            }
        }
        Command::Energy(args) => {
            let mut pendulum = args.sim.build()?;
            let report = EnergyReport::measure(&mut pendulum, args.sim.steps);
            report.write_to(out)?;

            if let Some(limit) = args.max_drift
                && !report.within(limit)
            {
                warn!(
                    relative = report.relative_drift(),
                    limit, "energy drift exceeded limit"
                );
                outcome = Outcome::DriftExceeded;
            }
        }
    }
    out.flush()?;
    Ok(outcome)
}
