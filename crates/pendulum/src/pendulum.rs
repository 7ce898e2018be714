//! The double pendulum state and its public operations.

use tracing::{debug, trace, warn};

use crate::config::{ConfigError, PendulumConfig};
use crate::dynamics::{self, Accelerations, Motion, Parameters, Phase};
use crate::geometry::Point;
use crate::integrator::{rk4_step, wrap_angle};
use crate::interaction::{Holds, InteractionMode};
use crate::kinematics::{bob_position, polar_offset};

/// Two rods with point masses hanging in series from a movable anchor.
///
/// The pendulum owns all of its physical state and is mutated in place by
/// three kinds of calls:
///
/// - [`step`](Self::step) advances the dynamics by one RK4 tick.
/// - The interactive setters ([`set_base_pos`](Self::set_base_pos),
///   [`set_upper_bob_pos`](Self::set_upper_bob_pos),
///   [`set_lower_bob_pos`](Self::set_lower_bob_pos)) re-derive geometry from a
///   dragged point.
/// - The scaling controls nudge the time step and the masses.
///
/// # Sign conventions
///
/// `ang0` is the upper rod's angle from the downward vertical, positive
/// toward +X. The lower bob is drawn at offset `(l1·sin(−ang1), l1·cos(−ang1))`
/// from the upper bob, so `ang1` is positive toward −X on screen. The
/// dynamics do not care; rendering and the drag setters do.
///
/// # Momenta
///
/// The integrated quantities are the generalized momenta, derived once from
/// `v0`/`v1` at construction. Nothing re-derives them afterwards: dragging
/// changes geometry, not momentum, and `v0`/`v1` are not advanced by
/// [`step`](Self::step). Hosts that want either refreshed call
/// [`reset_momenta`](Self::reset_momenta) or
/// [`sync_velocities`](Self::sync_velocities) explicitly.
///
/// # Host contract
///
/// Call [`step`](Self::step) only while nothing is held and the setters only
/// while the matching hold flag is set. The flags are advisory and this type
/// does not enforce the contract.
///
/// # Example
///
/// ```rust
/// use pendulum::{DoublePendulum, PendulumConfig};
///
/// let mut pendulum = DoublePendulum::new(PendulumConfig::default());
/// for _ in 0..100 {
///     pendulum.step();
/// }
/// let lower = pendulum.lower_bob();
/// assert!(lower.is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DoublePendulum {
    width: f64,
    height: f64,
    base: Point,
    ang0: f64,
    ang1: f64,
    v0: f64,
    v1: f64,
    acc0: f64,
    acc1: f64,
    moment0: f64,
    moment1: f64,
    base_radius: f64,
    l0: f64,
    l1: f64,
    r0: f64,
    r1: f64,
    m0: f64,
    m1: f64,
    g: f64,
    holds: Holds,
    mass_scale_factor: f64,
    speed_scale_factor: f64,
    dt: f64,
    fps: u32,
}

impl DoublePendulum {
    /// Builds the pendulum and derives its momenta from `v0`/`v1`.
    ///
    /// No validation is performed: zero lengths or masses are accepted and
    /// show up later as NaN or infinite positions. Use
    /// [`try_new`](Self::try_new) to reject them up front.
    pub fn new(config: PendulumConfig) -> Self {
        let PendulumConfig {
            width,
            height,
            x0,
            y0,
            ang0,
            ang1,
            v0,
            v1,
            acc0,
            acc1,
            base_radius,
            l0,
            l1,
            r0,
            r1,
            m0,
            m1,
            g,
            mass_scale_factor,
            speed_scale_factor,
            dt,
            fps,
        } = config;

        let mut pendulum = Self {
            width,
            height,
            base: Point::new(x0, y0),
            ang0,
            ang1,
            v0,
            v1,
            acc0,
            acc1,
            moment0: 0.0,
            moment1: 0.0,
            base_radius,
            l0,
            l1,
            r0,
            r1,
            m0,
            m1,
            g,
            holds: Holds::default(),
            mass_scale_factor,
            speed_scale_factor,
            dt,
            fps,
        };
        pendulum.set_moments();

        debug!(
            ang0,
            ang1,
            moment0 = pendulum.moment0,
            moment1 = pendulum.moment1,
            dt,
            "pendulum constructed"
        );
        pendulum
    }

    /// Builds the pendulum after checking the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when [`PendulumConfig::validate`] rejects the
    /// record.
    pub fn try_new(config: PendulumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    fn set_moments(&mut self) {
        (self.moment0, self.moment1) = dynamics::momenta(&self.parameters(), &self.motion());
    }

    // ------------------------------------------------------------------
    // Display metadata and direct overwrites
    // ------------------------------------------------------------------

    /// Sets the display width. No physical effect.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Sets the display height. No physical effect.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Overwrites the upper rod angle.
    pub fn set_upper_angle(&mut self, angle: f64) {
        self.ang0 = angle;
    }

    /// Overwrites the lower rod angle.
    pub fn set_lower_angle(&mut self, angle: f64) {
        self.ang1 = angle;
    }

    /// Overwrites the upper angular velocity. Momenta are left untouched.
    pub fn set_upper_velocity(&mut self, velocity: f64) {
        self.v0 = velocity;
    }

    /// Overwrites the lower angular velocity. Momenta are left untouched.
    pub fn set_lower_velocity(&mut self, velocity: f64) {
        self.v1 = velocity;
    }

    /// Overwrites the stored upper angular acceleration.
    pub fn set_upper_acceleration(&mut self, acceleration: f64) {
        self.acc0 = acceleration;
    }

    /// Overwrites the stored lower angular acceleration.
    pub fn set_lower_acceleration(&mut self, acceleration: f64) {
        self.acc1 = acceleration;
    }

    // ------------------------------------------------------------------
    // Scaling controls
    // ------------------------------------------------------------------

    /// Multiplies the time step by the speed scale factor.
    pub fn increase_speed(&mut self) {
        self.dt *= self.speed_scale_factor;
        debug!(dt = self.dt, "speed increased");
    }

    /// Divides the time step by the speed scale factor.
    pub fn decrease_speed(&mut self) {
        self.dt /= self.speed_scale_factor;
        debug!(dt = self.dt, "speed decreased");
    }

    /// Multiplies the upper mass by the mass scale factor.
    pub fn increase_upper_mass(&mut self) {
        self.m0 *= self.mass_scale_factor;
        debug!(m0 = self.m0, "upper mass increased");
    }

    /// Divides the upper mass by the mass scale factor.
    pub fn decrease_upper_mass(&mut self) {
        self.m0 /= self.mass_scale_factor;
        debug!(m0 = self.m0, "upper mass decreased");
    }

    /// Multiplies the lower mass by the mass scale factor.
    pub fn increase_lower_mass(&mut self) {
        self.m1 *= self.mass_scale_factor;
        debug!(m1 = self.m1, "lower mass increased");
    }

    /// Divides the lower mass by the mass scale factor.
    pub fn decrease_lower_mass(&mut self) {
        self.m1 /= self.mass_scale_factor;
        debug!(m1 = self.m1, "lower mass decreased");
    }

    /// Replaces the gravitational acceleration.
    pub fn set_gravity(&mut self, gravity: f64) {
        self.g = gravity;
        debug!(g = gravity, "gravity set");
    }

    // ------------------------------------------------------------------
    // Interactive setters (inverse kinematics)
    // ------------------------------------------------------------------

    /// Moves the anchor to `(x, y)` while the upper bob stays where it is.
    ///
    /// The upper rod's length and angle are re-derived from the new anchor
    /// to the old upper bob position. Momenta are not touched.
    pub fn set_base_pos(&mut self, x: f64, y: f64) {
        let upper = self.upper_bob();
        self.base = Point::new(x, y);
        (self.l0, self.ang0) = polar_offset(self.base, upper);
        trace!(x, y, l0 = self.l0, ang0 = self.ang0, "base dragged");
    }

    /// Moves the upper bob to `(x, y)` while the anchor stays where it is.
    ///
    /// Momenta are not touched.
    pub fn set_upper_bob_pos(&mut self, x: f64, y: f64) {
        (self.l0, self.ang0) = polar_offset(self.base, Point::new(x, y));
        trace!(x, y, l0 = self.l0, ang0 = self.ang0, "upper bob dragged");
    }

    /// Moves the lower bob to `(x, y)` while the upper bob stays where it is.
    ///
    /// The lower angle is stored negated, matching [`lower_bob`](Self::lower_bob).
    /// Momenta are not touched.
    pub fn set_lower_bob_pos(&mut self, x: f64, y: f64) {
        let (length, angle) = polar_offset(self.upper_bob(), Point::new(x, y));
        self.l1 = length;
        self.ang1 = -angle;
        trace!(x, y, l1 = self.l1, ang1 = self.ang1, "lower bob dragged");
    }

    /// Applies the interactive setter matching `mode` with `target`.
    ///
    /// Returns `false` without touching the state in
    /// [`InteractionMode::Simulating`].
    pub fn drag(&mut self, mode: InteractionMode, target: Point) -> bool {
        match mode {
            InteractionMode::Simulating => return false,
            InteractionMode::DraggingBase => self.set_base_pos(target.x, target.y),
            InteractionMode::DraggingUpperBob => self.set_upper_bob_pos(target.x, target.y),
            InteractionMode::DraggingLowerBob => self.set_lower_bob_pos(target.x, target.y),
        }
        true
    }

    // ------------------------------------------------------------------
    // Hold flags
    // ------------------------------------------------------------------

    /// Marks the anchor as held.
    pub fn hold_base(&mut self) {
        self.holds.base = true;
        debug!("base held");
    }

    /// Releases the anchor.
    pub fn drop_base(&mut self) {
        self.holds.base = false;
        debug!("base dropped");
    }

    /// Marks the upper bob as held.
    pub fn hold_upper_bob(&mut self) {
        self.holds.upper_bob = true;
        debug!("upper bob held");
    }

    /// Releases the upper bob.
    pub fn drop_upper_bob(&mut self) {
        self.holds.upper_bob = false;
        debug!("upper bob dropped");
    }

    /// Marks the lower bob as held.
    pub fn hold_lower_bob(&mut self) {
        self.holds.lower_bob = true;
        debug!("lower bob held");
    }

    /// Releases the lower bob.
    pub fn drop_lower_bob(&mut self) {
        self.holds.lower_bob = false;
        debug!("lower bob dropped");
    }

    /// Current hold flags.
    #[inline]
    pub const fn holds(&self) -> Holds {
        self.holds
    }

    /// The interaction mode implied by the hold flags.
    #[inline]
    pub const fn mode(&self) -> InteractionMode {
        self.holds.mode()
    }

    // ------------------------------------------------------------------
    // Forward kinematics
    // ------------------------------------------------------------------

    /// Position of the upper bob.
    #[inline]
    pub fn upper_bob(&self) -> Point {
        bob_position(self.base, self.ang0, self.l0)
    }

    /// Position of the lower bob, hanging from the upper bob at `-ang1`.
    #[inline]
    pub fn lower_bob(&self) -> Point {
        bob_position(self.upper_bob(), -self.ang1, self.l1)
    }

    // ------------------------------------------------------------------
    // Dynamics
    // ------------------------------------------------------------------

    /// Instantaneous angular accelerations from the stored velocities.
    ///
    /// Also writes the result into `acc0`/`acc1`. The trajectory is
    /// unaffected.
    ///
    /// `v0`/`v1` are whatever was last set; [`step`](Self::step) does not
    /// advance them. Call [`sync_velocities`](Self::sync_velocities) first
    /// for values that match the current motion.
    pub fn angular_accelerations(&mut self) -> Accelerations {
        let acc = dynamics::lagrangian_accelerations(&self.parameters(), &self.motion());
        self.set_upper_acceleration(acc.acc0);
        self.set_lower_acceleration(acc.acc1);
        acc
    }

    /// Advances angles and momenta by `dt` with one RK4 step, then wraps
    /// both angles into `(-π, π]`.
    pub fn step(&mut self) {
        let params = self.parameters();
        let next = rk4_step(self.phase(), self.dt, |phase| {
            dynamics::hamiltonian_derivative(&params, phase)
        });

        self.ang0 = wrap_angle(next.ang0);
        self.ang1 = wrap_angle(next.ang1);
        self.moment0 = next.moment0;
        self.moment1 = next.moment1;

        if next.is_finite() {
            trace!(ang0 = self.ang0, ang1 = self.ang1, "step");
        } else {
            warn!(?next, "step produced a non-finite state");
        }
    }

    /// Total mechanical energy of the current angles and momenta.
    pub fn energy(&self) -> f64 {
        dynamics::total_energy(&self.parameters(), self.phase())
    }

    /// Overwrites `v0`/`v1` with the velocities implied by the momenta.
    pub fn sync_velocities(&mut self) {
        (self.v0, self.v1) = dynamics::angular_velocities(&self.parameters(), self.phase());
        trace!(v0 = self.v0, v1 = self.v1, "velocities synced");
    }

    /// Re-derives the momenta from `v0`/`v1` and the current geometry.
    ///
    /// Nothing calls this implicitly; it is the host's way of discarding
    /// momenta left stale by a drag.
    pub fn reset_momenta(&mut self) {
        self.set_moments();
        debug!(
            moment0 = self.moment0,
            moment1 = self.moment1,
            "momenta reset"
        );
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Masses, lengths and gravity.
    #[inline]
    pub const fn parameters(&self) -> Parameters {
        Parameters {
            m0: self.m0,
            m1: self.m1,
            l0: self.l0,
            l1: self.l1,
            g: self.g,
        }
    }

    /// Angles and momenta.
    #[inline]
    pub const fn phase(&self) -> Phase {
        Phase {
            ang0: self.ang0,
            ang1: self.ang1,
            moment0: self.moment0,
            moment1: self.moment1,
        }
    }

    /// Angles and stored angular velocities.
    #[inline]
    pub const fn motion(&self) -> Motion {
        Motion {
            ang0: self.ang0,
            ang1: self.ang1,
            v0: self.v0,
            v1: self.v1,
        }
    }

    /// Display width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Display height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Anchor position.
    #[inline]
    pub const fn base(&self) -> Point {
        self.base
    }

    /// Upper rod angle.
    #[inline]
    pub const fn upper_angle(&self) -> f64 {
        self.ang0
    }

    /// Lower rod angle.
    #[inline]
    pub const fn lower_angle(&self) -> f64 {
        self.ang1
    }

    /// Stored upper angular velocity.
    #[inline]
    pub const fn upper_velocity(&self) -> f64 {
        self.v0
    }

    /// Stored lower angular velocity.
    #[inline]
    pub const fn lower_velocity(&self) -> f64 {
        self.v1
    }

    /// Stored upper angular acceleration.
    #[inline]
    pub const fn upper_acceleration(&self) -> f64 {
        self.acc0
    }

    /// Stored lower angular acceleration.
    #[inline]
    pub const fn lower_acceleration(&self) -> f64 {
        self.acc1
    }

    /// Momentum conjugate to the upper angle.
    #[inline]
    pub const fn upper_moment(&self) -> f64 {
        self.moment0
    }

    /// Momentum conjugate to the lower angle.
    #[inline]
    pub const fn lower_moment(&self) -> f64 {
        self.moment1
    }

    /// Anchor display radius.
    #[inline]
    pub const fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Upper rod length.
    #[inline]
    pub const fn upper_length(&self) -> f64 {
        self.l0
    }

    /// Lower rod length.
    #[inline]
    pub const fn lower_length(&self) -> f64 {
        self.l1
    }

    /// Upper bob display radius.
    #[inline]
    pub const fn upper_radius(&self) -> f64 {
        self.r0
    }

    /// Lower bob display radius.
    #[inline]
    pub const fn lower_radius(&self) -> f64 {
        self.r1
    }

    /// Upper bob mass.
    #[inline]
    pub const fn upper_mass(&self) -> f64 {
        self.m0
    }

    /// Lower bob mass.
    #[inline]
    pub const fn lower_mass(&self) -> f64 {
        self.m1
    }

    /// Gravitational acceleration.
    #[inline]
    pub const fn gravity(&self) -> f64 {
        self.g
    }

    /// Mass nudge factor.
    #[inline]
    pub const fn mass_scale_factor(&self) -> f64 {
        self.mass_scale_factor
    }

    /// Time step nudge factor.
    #[inline]
    pub const fn speed_scale_factor(&self) -> f64 {
        self.speed_scale_factor
    }

    /// Integration time step.
    #[inline]
    pub const fn dt(&self) -> f64 {
        self.dt
    }

    /// Advisory display rate.
    #[inline]
    pub const fn fps(&self) -> u32 {
        self.fps
    }
}
