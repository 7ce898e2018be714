//! Equations of motion for the double pendulum.
//!
//! Two independent formulations live here:
//!
//! - **Hamiltonian**: [`hamiltonian_derivative`] maps angles and generalized
//!   momenta to their time derivatives. This is what the integrator advances.
//! - **Lagrangian**: [`lagrangian_accelerations`] maps angles and angular
//!   velocities to angular accelerations. It is an instantaneous, display-only
//!   quantity and never feeds back into the trajectory.
//!
//! Both use the textbook convention where the lower angle enters the
//! potential as `cos(ang1)`. Everything here is a pure function of its
//! arguments; nothing is cached between calls.
//!
//! # Example
//!
//! ```rust
//! use pendulum::{hamiltonian_derivative, momenta, Motion, Parameters, Phase};
//!
//! let params = Parameters { m0: 1.0, m1: 1.0, l0: 1.0, l1: 1.0, g: 9.8 };
//! let motion = Motion { ang0: 0.3, ang1: -0.2, v0: 0.0, v1: 0.0 };
//! let (moment0, moment1) = momenta(&params, &motion);
//!
//! let rates = hamiltonian_derivative(
//!     &params,
//!     Phase { ang0: motion.ang0, ang1: motion.ang1, moment0, moment1 },
//! );
//! // Released from rest: no angular velocity yet, but gravity pulls back.
//! assert_eq!(rates.ang0, 0.0);
//! assert!(rates.moment0 < 0.0);
//! ```

use core::ops::{Add, Mul};

/// Physical constants of the system: bob masses, rod lengths, gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Upper bob mass.
    pub m0: f64,
    /// Lower bob mass.
    pub m1: f64,
    /// Upper rod length.
    pub l0: f64,
    /// Lower rod length.
    pub l1: f64,
    /// Gravitational acceleration.
    pub g: f64,
}

/// The integrated state: both angles and their conjugate momenta.
///
/// `Phase` doubles as the type of its own time derivative, which is what
/// lets the integrator write `state + k * h`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Phase {
    /// Upper rod angle.
    pub ang0: f64,
    /// Lower rod angle.
    pub ang1: f64,
    /// Momentum conjugate to `ang0`.
    pub moment0: f64,
    /// Momentum conjugate to `ang1`.
    pub moment1: f64,
}

impl Phase {
    /// Whether every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.ang0.is_finite()
            && self.ang1.is_finite()
            && self.moment0.is_finite()
            && self.moment1.is_finite()
    }
}

impl Add for Phase {
    type Output = Phase;

    #[inline]
    fn add(self, other: Phase) -> Phase {
        Phase {
            ang0: self.ang0 + other.ang0,
            ang1: self.ang1 + other.ang1,
            moment0: self.moment0 + other.moment0,
            moment1: self.moment1 + other.moment1,
        }
    }
}

impl Mul<f64> for Phase {
    type Output = Phase;

    #[inline]
    fn mul(self, scalar: f64) -> Phase {
        Phase {
            ang0: self.ang0 * scalar,
            ang1: self.ang1 * scalar,
            moment0: self.moment0 * scalar,
            moment1: self.moment1 * scalar,
        }
    }
}

/// Angles paired with angular velocities, the Lagrangian view of the state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    /// Upper rod angle.
    pub ang0: f64,
    /// Lower rod angle.
    pub ang1: f64,
    /// Upper angular velocity.
    pub v0: f64,
    /// Lower angular velocity.
    pub v1: f64,
}

/// Instantaneous angular accelerations of both rods.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accelerations {
    /// Upper angular acceleration.
    pub acc0: f64,
    /// Lower angular acceleration.
    pub acc1: f64,
}

/// Trig terms of the angle difference, computed once per evaluation.
#[derive(Debug, Clone, Copy)]
struct AngleTerms {
    sin_diff: f64,
    cos_diff: f64,
    sin_2diff: f64,
    cos_2diff: f64,
}

impl AngleTerms {
    #[inline]
    fn new(ang0: f64, ang1: f64) -> Self {
        let diff = ang0 - ang1;
        let (sin_diff, cos_diff) = diff.sin_cos();
        let (sin_2diff, cos_2diff) = (2.0 * diff).sin_cos();
        Self {
            sin_diff,
            cos_diff,
            sin_2diff,
            cos_2diff,
        }
    }
}

/// Generalized momenta for the given angles and angular velocities.
///
/// Applies the mass/inertia coupling matrix:
///
/// ```text
/// c        = m1·l0·l1·cos(ang0 − ang1)
/// moment0  = (m0 + m1)·l0²·v0 + c·v1
/// moment1  = m1·l1²·v1 + c·v0
/// ```
#[inline]
pub fn momenta(params: &Parameters, motion: &Motion) -> (f64, f64) {
    let Parameters { m0, m1, l0, l1, .. } = *params;
    let common = m1 * l0 * l1 * (motion.ang0 - motion.ang1).cos();
    let moment0 = (m0 + m1) * l0 * l0 * motion.v0 + motion.v1 * common;
    let moment1 = m1 * l1 * l1 * motion.v1 + motion.v0 * common;
    (moment0, moment1)
}

/// Time derivative of the phase under the double pendulum Hamiltonian.
///
/// Returns `(dAng0, dAng1, dMoment0, dMoment1)` packed as a [`Phase`].
/// Degenerate parameters (a zero length or mass) divide by zero and the
/// resulting NaN/∞ values are returned as-is.
pub fn hamiltonian_derivative(params: &Parameters, phase: Phase) -> Phase {
    let Parameters { m0, m1, l0, l1, g } = *params;
    let Phase {
        ang0,
        ang1,
        moment0,
        moment1,
    } = phase;
    let t = AngleTerms::new(ang0, ang1);

    let c0 = l0 * l1 * (m0 + m1 * t.sin_diff * t.sin_diff);
    let c1 = moment0 * moment1 * t.sin_diff / c0;
    let c2 = (m1 * (l1 * moment0).powi(2) + (m0 + m1) * (l0 * moment1).powi(2)
        - 2.0 * l0 * l1 * m1 * moment0 * moment1 * t.cos_diff)
        * t.sin_2diff
        / (2.0 * c0 * c0);

    Phase {
        ang0: (l1 * moment0 - l0 * moment1 * t.cos_diff) / (l0 * c0),
        ang1: (l0 * (m0 + m1) * moment1 - l1 * m1 * moment0 * t.cos_diff) / (l1 * m1 * c0),
        moment0: -(m0 + m1) * g * l0 * ang0.sin() - c1 + c2,
        moment1: -m1 * g * l1 * ang1.sin() + c1 - c2,
    }
}

/// Angular velocities implied by a phase, `(∂H/∂moment0, ∂H/∂moment1)`.
///
/// Inverse of [`momenta`] for the same angles.
#[inline]
pub fn angular_velocities(params: &Parameters, phase: Phase) -> (f64, f64) {
    let rates = hamiltonian_derivative(params, phase);
    (rates.ang0, rates.ang1)
}

/// Angular accelerations from the Lagrangian equations of motion.
///
/// Independent of [`hamiltonian_derivative`]; reads angular velocities
/// directly, so it is only as current as the velocities it is handed.
pub fn lagrangian_accelerations(params: &Parameters, motion: &Motion) -> Accelerations {
    let Parameters { m0, m1, l0, l1, g } = *params;
    let Motion { ang0, ang1, v0, v1 } = *motion;
    let t = AngleTerms::new(ang0, ang1);

    let upper_kinetic = l0 * v0 * v0;
    let lower_kinetic = l1 * v1 * v1;
    let double_upper = 2.0 * m0 + m1;
    let base = double_upper - m1 * t.cos_2diff;

    let acc0 = (-g * double_upper * ang0.sin()
        - m1 * g * (ang0 - 2.0 * ang1).sin()
        - 2.0 * t.sin_diff * m1 * (lower_kinetic + upper_kinetic * t.cos_diff))
        / (l0 * base);
    let acc1 = 2.0
        * t.sin_diff
        * ((upper_kinetic + g * ang0.cos()) * (m0 + m1) + lower_kinetic * m1 * t.cos_diff)
        / (l1 * base);

    Accelerations { acc0, acc1 }
}

/// Kinetic energy carried by the momenta.
pub fn kinetic_energy(params: &Parameters, phase: Phase) -> f64 {
    let Parameters { m0, m1, l0, l1, .. } = *params;
    let t = AngleTerms::new(phase.ang0, phase.ang1);
    let Phase {
        moment0, moment1, ..
    } = phase;

    let numerator = m1 * (l1 * moment0).powi(2) + (m0 + m1) * (l0 * moment1).powi(2)
        - 2.0 * m1 * l0 * l1 * moment0 * moment1 * t.cos_diff;
    let denominator =
        2.0 * l0 * l0 * l1 * l1 * m1 * (m0 + m1 * t.sin_diff * t.sin_diff);
    numerator / denominator
}

/// Gravitational potential energy, zero with both rods horizontal.
pub fn potential_energy(params: &Parameters, phase: Phase) -> f64 {
    let Parameters { m0, m1, l0, l1, g } = *params;
    -(m0 + m1) * g * l0 * phase.ang0.cos() - m1 * g * l1 * phase.ang1.cos()
}

/// Total mechanical energy, the value of the Hamiltonian.
#[inline]
pub fn total_energy(params: &Parameters, phase: Phase) -> f64 {
    kinetic_energy(params, phase) + potential_energy(params, phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    const TOLERANCE: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn unit_params() -> Parameters {
        Parameters {
            m0: 1.0,
            m1: 1.0,
            l0: 1.0,
            l1: 1.0,
            g: 9.8,
        }
    }

    fn lopsided_params() -> Parameters {
        Parameters {
            m0: 2.5,
            m1: 0.7,
            l0: 1.3,
            l1: 0.6,
            g: 9.81,
        }
    }

    #[test]
    fn test_momenta_at_rest_are_zero() {
        let motion = Motion {
            ang0: 0.7,
            ang1: -1.1,
            v0: 0.0,
            v1: 0.0,
        };
        let (p0, p1) = momenta(&unit_params(), &motion);
        assert!(approx_eq(p0, 0.0));
        assert!(approx_eq(p1, 0.0));
    }

    #[test]
    fn test_momenta_aligned_rods() {
        // Aligned rods: cos(0) = 1, so the coupling term is m1·l0·l1.
        let motion = Motion {
            ang0: 0.0,
            ang1: 0.0,
            v0: 1.0,
            v1: 2.0,
        };
        let (p0, p1) = momenta(&unit_params(), &motion);
        assert!(approx_eq(p0, 2.0 * 1.0 + 2.0));
        assert!(approx_eq(p1, 2.0 + 1.0));
    }

    #[test]
    fn test_angular_velocities_invert_momenta() {
        let params = lopsided_params();
        let motion = Motion {
            ang0: 0.4,
            ang1: 2.1,
            v0: -1.7,
            v1: 3.2,
        };
        let (moment0, moment1) = momenta(&params, &motion);
        let (v0, v1) = angular_velocities(
            &params,
            Phase {
                ang0: motion.ang0,
                ang1: motion.ang1,
                moment0,
                moment1,
            },
        );
        assert!(approx_eq(v0, motion.v0), "v0 {v0}");
        assert!(approx_eq(v1, motion.v1), "v1 {v1}");
    }

    #[test]
    fn test_equilibrium_is_stationary() {
        let rates = hamiltonian_derivative(&unit_params(), Phase::default());
        assert_eq!(rates, Phase::default());

        let acc = lagrangian_accelerations(&unit_params(), &Motion::default());
        assert!(approx_eq(acc.acc0, 0.0));
        assert!(approx_eq(acc.acc1, 0.0));
    }

    #[test]
    fn test_horizontal_release_pulls_down() {
        let rates = hamiltonian_derivative(
            &unit_params(),
            Phase {
                ang0: FRAC_PI_2,
                ang1: FRAC_PI_2,
                moment0: 0.0,
                moment1: 0.0,
            },
        );
        // -(m0+m1)·g·l0 and -m1·g·l1 with no coupling at rest.
        assert!(approx_eq(rates.moment0, -19.6));
        assert!(approx_eq(rates.moment1, -9.8));
    }

    #[test]
    fn test_lagrangian_agrees_with_single_pendulum_limit() {
        // Rods aligned and at rest: the upper bob feels -g·sin(θ)/l0 once
        // the lower bob is weightless.
        let params = Parameters {
            m0: 1.0,
            m1: 1e-12,
            l0: 2.0,
            l1: 1.0,
            g: 9.8,
        };
        let motion = Motion {
            ang0: 0.5,
            ang1: 0.5,
            v0: 0.0,
            v1: 0.0,
        };
        let acc = lagrangian_accelerations(&params, &motion);
        assert!((acc.acc0 - (-9.8 * 0.5_f64.sin() / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_energy_at_rest_is_potential() {
        let params = unit_params();
        let phase = Phase {
            ang0: 0.0,
            ang1: 0.0,
            moment0: 0.0,
            moment1: 0.0,
        };
        assert!(approx_eq(kinetic_energy(&params, phase), 0.0));
        assert!(approx_eq(total_energy(&params, phase), -19.6 - 9.8));
    }

    #[test]
    fn test_kinetic_energy_matches_velocity_form() {
        let params = lopsided_params();
        let motion = Motion {
            ang0: -0.9,
            ang1: 1.4,
            v0: 2.0,
            v1: -0.5,
        };
        let (moment0, moment1) = momenta(&params, &motion);
        let phase = Phase {
            ang0: motion.ang0,
            ang1: motion.ang1,
            moment0,
            moment1,
        };

        let Parameters { m0, m1, l0, l1, .. } = params;
        let expected = 0.5 * (m0 + m1) * l0 * l0 * motion.v0 * motion.v0
            + 0.5 * m1 * l1 * l1 * motion.v1 * motion.v1
            + m1 * l0 * l1 * motion.v0 * motion.v1 * (motion.ang0 - motion.ang1).cos();
        assert!(approx_eq(kinetic_energy(&params, phase), expected));
    }

    #[test]
    fn test_degenerate_length_propagates_non_finite() {
        let params = Parameters {
            l0: 0.0,
            ..unit_params()
        };
        let rates = hamiltonian_derivative(
            &params,
            Phase {
                ang0: 0.3,
                ang1: 0.1,
                moment0: 1.0,
                moment1: 1.0,
            },
        );
        assert!(!rates.is_finite());
    }

    #[test]
    fn test_phase_arithmetic() {
        let a = Phase {
            ang0: 1.0,
            ang1: 2.0,
            moment0: 3.0,
            moment1: 4.0,
        };
        let sum = a + a * 0.5;
        assert_eq!(
            sum,
            Phase {
                ang0: 1.5,
                ang1: 3.0,
                moment0: 4.5,
                moment1: 6.0,
            }
        );
    }
}
