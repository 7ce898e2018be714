#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::struct_field_names)]

//! # Pendulum
//!
//! A double pendulum for real-time interactive display.
//!
//! Pendulum provides:
//! - **DoublePendulum**: the owned state, advanced one RK4 tick at a time
//!   and re-parameterized on the fly while the user drags the anchor or a bob
//! - **Dynamics**: the Hamiltonian derivative that drives integration and an
//!   independent Lagrangian acceleration query for display
//! - **Kinematics**: angle/length to position and back
//!
//! ## Simulation Example
//!
//! ```rust
//! use pendulum::{DoublePendulum, PendulumConfig};
//!
//! let mut pendulum = DoublePendulum::new(PendulumConfig::default());
//! let start = pendulum.energy();
//!
//! // One second of motion at the default 1 ms step
//! for _ in 0..1000 {
//!     pendulum.step();
//! }
//!
//! assert!((pendulum.energy() - start).abs() < 1e-3);
//! ```
//!
//! ## Drag Example
//!
//! ```rust
//! use pendulum::{DoublePendulum, InteractionMode, PendulumConfig, Point};
//!
//! let mut pendulum = DoublePendulum::new(PendulumConfig::default());
//!
//! // Pointer down on the lower bob
//! pendulum.hold_lower_bob();
//! assert_eq!(pendulum.mode(), InteractionMode::DraggingLowerBob);
//!
//! // Pointer moves: the host calls the setter instead of stepping
//! let joint = pendulum.upper_bob();
//! pendulum.drag(pendulum.mode(), Point::new(joint.x, joint.y + 2.0));
//! assert!((pendulum.lower_length() - 2.0).abs() < 1e-12);
//!
//! // Pointer up: back to simulating
//! pendulum.drop_lower_bob();
//! assert_eq!(pendulum.mode(), InteractionMode::Simulating);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`PendulumConfig`] and the
//!   small value types.

mod config;
mod dynamics;
mod geometry;
mod integrator;
mod interaction;
mod kinematics;
mod pendulum;

pub use config::{ConfigError, PendulumConfig, Segment};
pub use dynamics::{
    Accelerations, Motion, Parameters, Phase, angular_velocities, hamiltonian_derivative,
    kinetic_energy, lagrangian_accelerations, momenta, potential_energy, total_energy,
};
pub use geometry::{Point, Vector};
pub use integrator::{rk4_step, wrap_angle};
pub use interaction::{Holds, InteractionMode};
pub use kinematics::{bob_position, polar_offset};
pub use pendulum::DoublePendulum;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ConfigError, PendulumConfig};
    pub use crate::geometry::{Point, Vector};
    pub use crate::interaction::{Holds, InteractionMode};
    pub use crate::pendulum::DoublePendulum;
}
