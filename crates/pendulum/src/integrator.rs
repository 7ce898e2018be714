//! Classical fourth-order Runge-Kutta stepping and angle normalization.

use core::f64::consts::PI;

use crate::dynamics::Phase;

const TAU: f64 = 2.0 * PI;

/// Advances `state` by `dt` with one classical RK4 step.
///
/// `derivative` is evaluated four times: at `state`, twice at half-step
/// estimates, and once at the full-step estimate. The result is not
/// angle-normalized; see [`wrap_angle`].
///
/// # Example
///
/// ```rust
/// use pendulum::{rk4_step, Phase};
///
/// // dθ/dt = 1 everywhere: one step of 0.5 moves θ by 0.5.
/// let next = rk4_step(Phase::default(), 0.5, |_| Phase { ang0: 1.0, ..Phase::default() });
/// assert!((next.ang0 - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn rk4_step<F>(state: Phase, dt: f64, derivative: F) -> Phase
where
    F: Fn(Phase) -> Phase,
{
    let k1 = derivative(state);
    let k2 = derivative(state + k1 * (0.5 * dt));
    let k3 = derivative(state + k2 * (0.5 * dt));
    let k4 = derivative(state + k3 * dt);

    state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}

/// Wraps an angle into the half-open interval `(-π, π]`.
///
/// Computed as `((3π + angle) mod 2π) − π` with a Euclidean remainder, so
/// arbitrarily negative inputs land in range too. The one value that formula
/// sends to `-π` is moved to `π`. Non-finite input stays non-finite.
///
/// # Example
///
/// ```rust
/// use core::f64::consts::PI;
/// use pendulum::wrap_angle;
///
/// assert!((wrap_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// assert!((wrap_angle(0.25) - 0.25).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (3.0 * PI + angle).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}
