//! Driving a [`DoublePendulum`] without a renderer.
//!
//! [`Trajectory`] plays the part of an animation loop: it steps the
//! pendulum and hands out the frame a renderer would draw.
//! [`EnergyReport`] summarizes how well a run conserved energy.

use std::io::{self, Write};

use pendulum::{DoublePendulum, Point};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::OutputFormat;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// Integrator steps taken so far.
    pub step: u64,
    /// Simulated time elapsed.
    pub time: f64,
    /// Upper rod angle.
    pub ang0: f64,
    /// Lower rod angle.
    pub ang1: f64,
    /// Upper generalized momentum.
    pub moment0: f64,
    /// Lower generalized momentum.
    pub moment1: f64,
    /// Anchor position.
    pub base: Point,
    /// Upper bob position.
    pub upper: Point,
    /// Lower bob position.
    pub lower: Point,
    /// Total mechanical energy.
    pub energy: f64,
}

impl Frame {
    /// Snapshot of the pendulum after `step` steps and `time` seconds.
    pub fn capture(pendulum: &DoublePendulum, step: u64, time: f64) -> Self {
        let phase = pendulum.phase();
        Self {
            step,
            time,
            ang0: phase.ang0,
            ang1: phase.ang1,
            moment0: phase.moment0,
            moment1: phase.moment1,
            base: pendulum.base(),
            upper: pendulum.upper_bob(),
            lower: pendulum.lower_bob(),
            energy: pendulum.energy(),
        }
    }

    /// Writes the frame in the requested format, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
            OutputFormat::Plain => writeln!(
                out,
                "{:>8} {:>10.4} {:>10.6} {:>10.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>14.8}",
                self.step,
                self.time,
                self.ang0,
                self.ang1,
                self.upper.x,
                self.upper.y,
                self.lower.x,
                self.lower.y,
                self.energy,
            ),
        }
    }
}

/// Column header matching [`OutputFormat::Plain`] frames.
pub const PLAIN_HEADER: &str = "    step       time       ang0       ang1      upper_x      upper_y      lower_x      lower_y         energy";

/// Steps a pendulum and yields a [`Frame`] every `every` steps.
///
/// The first frame is the untouched starting state (step 0). The last frame
/// is at step `steps` whether or not it falls on the `every` grid.
#[derive(Debug)]
pub struct Trajectory<'a> {
    pendulum: &'a mut DoublePendulum,
    steps: u64,
    every: u64,
    taken: u64,
    time: f64,
    started: bool,
}

impl<'a> Trajectory<'a> {
    /// Creates a trajectory of `steps` steps. An `every` of zero is treated
    /// as one.
    pub fn new(pendulum: &'a mut DoublePendulum, steps: u64, every: u64) -> Self {
        Self {
            pendulum,
            steps,
            every: every.max(1),
            taken: 0,
            time: 0.0,
            started: false,
        }
    }
}

impl Iterator for Trajectory<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if !self.started {
            self.started = true;
            return Some(Frame::capture(self.pendulum, 0, 0.0));
        }
        if self.taken >= self.steps {
            return None;
        }

        let batch = self.every.min(self.steps - self.taken);
        for _ in 0..batch {
            self.time += self.pendulum.dt();
            self.pendulum.step();
        }
        self.taken += batch;
        Some(Frame::capture(self.pendulum, self.taken, self.time))
    }
}

/// Energy conservation over a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyReport {
    /// Steps simulated.
    pub steps: u64,
    /// Energy before the first step.
    pub initial: f64,
    /// Energy after the last step.
    #[serde(rename = "final")]
    pub final_energy: f64,
    /// Largest `|E − E₀|` seen after any step.
    pub max_drift: f64,
    /// `(m0 + m1)·g·l0 + m1·g·l1`, the energy needed to lift both bobs
    /// one rod length. Without gravity this is `|E₀|` instead.
    pub scale: f64,
}

impl EnergyReport {
    /// Runs `steps` steps and records the energy after each one.
    pub fn measure(pendulum: &mut DoublePendulum, steps: u64) -> Self {
        let initial = pendulum.energy();
        let params = pendulum.parameters();
        let lift = ((params.m0 + params.m1) * params.g * params.l0
            + params.m1 * params.g * params.l1)
            .abs();
        // With g = 0 the energy is all kinetic.
        let scale = if lift > 0.0 { lift } else { initial.abs() };

        let mut max_drift: f64 = 0.0;
        for _ in 0..steps {
            pendulum.step();
            let drift = (pendulum.energy() - initial).abs();
            if drift.is_nan() {
                max_drift = f64::NAN;
                break;
            }
            max_drift = max_drift.max(drift);
        }

        let report = Self {
            steps,
            initial,
            final_energy: pendulum.energy(),
            max_drift,
            scale,
        };
        info!(
            initial,
            max_drift = report.max_drift,
            relative = report.relative_drift(),
            "energy measured"
        );
        report
    }

    /// `max_drift / scale`. NaN when the run went non-finite.
    ///
    /// A run with no drift at all is zero even when the scale is zero, as
    /// for a pendulum at rest without gravity.
    pub fn relative_drift(&self) -> f64 {
        if self.max_drift == 0.0 {
            0.0
        } else {
            self.max_drift / self.scale
        }
    }

    /// Whether the relative drift stays within `limit`. NaN never does.
    pub fn within(&self, limit: f64) -> bool {
        let relative = self.relative_drift();
        debug!(relative, limit, "checking drift");
        relative <= limit
    }

    /// Writes a short human-readable summary.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "steps:          {}", self.steps)?;
        writeln!(out, "initial energy: {:.10}", self.initial)?;
        writeln!(out, "final energy:   {:.10}", self.final_energy)?;
        writeln!(out, "max drift:      {:.3e}", self.max_drift)?;
        writeln!(out, "energy scale:   {:.6}", self.scale)?;
        writeln!(out, "relative drift: {:.3e}", self.relative_drift())
    }
}
