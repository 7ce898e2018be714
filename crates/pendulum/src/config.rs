//! Construction record for a [`DoublePendulum`](crate::DoublePendulum).
//!
//! Every field is required. With the `serde` feature enabled the record can
//! be loaded from any serde format; missing fields are an error rather than
//! silently defaulted.

use core::fmt;
use core::f64::consts::FRAC_PI_2;

use thiserror::Error;

/// Which of the two rod/bob pairs a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The rod hanging from the anchor and its bob.
    Upper,
    /// The rod hanging from the upper bob and its bob.
    Lower,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => f.write_str("upper"),
            Self::Lower => f.write_str("lower"),
        }
    }
}

/// Rejected configuration, reported by [`PendulumConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A rod length is zero or negative.
    #[error("{which} rod length must be positive, got {value}")]
    NonPositiveLength {
        /// Offending rod.
        which: Segment,
        /// Configured length.
        value: f64,
    },

    /// A bob mass is zero or negative.
    #[error("{which} bob mass must be positive, got {value}")]
    NonPositiveMass {
        /// Offending bob.
        which: Segment,
        /// Configured mass.
        value: f64,
    },

    /// A field holds NaN or an infinity.
    #[error("{field} must be finite")]
    NonFinite {
        /// Field name as it appears in the record.
        field: &'static str,
    },

    /// A scale factor cannot be undone by dividing.
    #[error("{field} must be positive, got {value}")]
    InvalidScaleFactor {
        /// Field name as it appears in the record.
        field: &'static str,
        /// Configured factor.
        value: f64,
    },

    /// The integration step is zero or negative.
    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),
}

/// Every field needed to build a [`DoublePendulum`](crate::DoublePendulum).
///
/// Positions are in world coordinates with Y growing downward. Angles are
/// radians from the downward vertical; the lower angle uses the mirrored
/// sign convention described on [`DoublePendulum`](crate::DoublePendulum).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct PendulumConfig {
    /// Display width. Metadata only.
    pub width: f64,
    /// Display height. Metadata only.
    pub height: f64,
    /// Anchor X.
    pub x0: f64,
    /// Anchor Y.
    pub y0: f64,
    /// Upper rod angle.
    pub ang0: f64,
    /// Lower rod angle.
    pub ang1: f64,
    /// Initial upper angular velocity; seeds the momenta.
    pub v0: f64,
    /// Initial lower angular velocity; seeds the momenta.
    pub v1: f64,
    /// Initial upper angular acceleration (display value).
    pub acc0: f64,
    /// Initial lower angular acceleration (display value).
    pub acc1: f64,
    /// Anchor display radius.
    pub base_radius: f64,
    /// Upper rod length.
    pub l0: f64,
    /// Lower rod length.
    pub l1: f64,
    /// Upper bob display radius.
    pub r0: f64,
    /// Lower bob display radius.
    pub r1: f64,
    /// Upper bob mass.
    pub m0: f64,
    /// Lower bob mass.
    pub m1: f64,
    /// Gravitational acceleration.
    pub g: f64,
    /// Factor applied by the mass nudges.
    pub mass_scale_factor: f64,
    /// Factor applied by the speed nudges.
    pub speed_scale_factor: f64,
    /// Integration time step.
    pub dt: f64,
    /// Advisory display rate. Not enforced.
    pub fps: u32,
}

impl Default for PendulumConfig {
    /// Unit masses and rods, both released horizontally from rest.
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            x0: 0.0,
            y0: 0.0,
            ang0: FRAC_PI_2,
            ang1: FRAC_PI_2,
            v0: 0.0,
            v1: 0.0,
            acc0: 0.0,
            acc1: 0.0,
            base_radius: 0.05,
            l0: 1.0,
            l1: 1.0,
            r0: 0.1,
            r1: 0.1,
            m0: 1.0,
            m1: 1.0,
            g: 9.8,
            mass_scale_factor: 1.1,
            speed_scale_factor: 1.1,
            dt: 0.001,
            fps: 60,
        }
    }
}

impl PendulumConfig {
    /// Checks the record for values that make the physics degenerate.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a non-finite field, a non-positive
    /// length or mass, a non-positive scale factor, or a non-positive time
    /// step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.scalar_fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        for (which, value) in [(Segment::Upper, self.l0), (Segment::Lower, self.l1)] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveLength { which, value });
            }
        }

        for (which, value) in [(Segment::Upper, self.m0), (Segment::Lower, self.m1)] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveMass { which, value });
            }
        }

        for (field, value) in [
            ("mass_scale_factor", self.mass_scale_factor),
            ("speed_scale_factor", self.speed_scale_factor),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::InvalidScaleFactor { field, value });
            }
        }

        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }

        Ok(())
    }

    fn scalar_fields(&self) -> [(&'static str, f64); 21] {
        [
            ("width", self.width),
            ("height", self.height),
            ("x0", self.x0),
            ("y0", self.y0),
            ("ang0", self.ang0),
            ("ang1", self.ang1),
            ("v0", self.v0),
            ("v1", self.v1),
            ("acc0", self.acc0),
            ("acc1", self.acc1),
            ("base_radius", self.base_radius),
            ("l0", self.l0),
            ("l1", self.l1),
            ("r0", self.r0),
            ("r1", self.r1),
            ("m0", self.m0),
            ("m1", self.m1),
            ("g", self.g),
            ("mass_scale_factor", self.mass_scale_factor),
            ("speed_scale_factor", self.speed_scale_factor),
            ("dt", self.dt),
        ]
    }
}
