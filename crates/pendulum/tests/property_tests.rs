#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::similar_names)]

use std::f64::consts::PI;

use pendulum::{DoublePendulum, Motion, Parameters, PendulumConfig, momenta};
use proptest::prelude::*;

fn in_range(angle: f64) -> bool {
    angle > -PI && angle <= PI
}

#[allow(clippy::too_many_arguments)]
fn config(
    ang0: f64,
    ang1: f64,
    v0: f64,
    v1: f64,
    l0: f64,
    l1: f64,
    m0: f64,
    m1: f64,
) -> PendulumConfig {
    PendulumConfig {
        ang0,
        ang1,
        v0,
        v1,
        l0,
        l1,
        m0,
        m1,
        ..PendulumConfig::default()
    }
}

// =============================================================================
// Angle wrap invariant
// =============================================================================

proptest! {
    #[test]
    fn step_keeps_angles_in_range(
        ang0 in -20.0f64..20.0,
        ang1 in -20.0f64..20.0,
        v0 in -5.0f64..5.0,
        v1 in -5.0f64..5.0,
        l0 in 0.2f64..3.0,
        l1 in 0.2f64..3.0,
        m0 in 0.1f64..5.0,
        m1 in 0.1f64..5.0,
        dt in 1e-4f64..5e-3,
    ) {
        let mut p = DoublePendulum::new(PendulumConfig {
            dt,
            ..config(ang0, ang1, v0, v1, l0, l1, m0, m1)
        });

        for _ in 0..50 {
            p.step();
            prop_assert!(in_range(p.upper_angle()), "ang0 out of range: {}", p.upper_angle());
            prop_assert!(in_range(p.lower_angle()), "ang1 out of range: {}", p.lower_angle());
        }
    }

    #[test]
    fn step_never_produces_nan_for_valid_config(
        ang0 in -PI..PI,
        ang1 in -PI..PI,
        v0 in -3.0f64..3.0,
        v1 in -3.0f64..3.0,
    ) {
        let mut p = DoublePendulum::new(config(ang0, ang1, v0, v1, 1.0, 1.0, 1.0, 1.0));
        for _ in 0..200 {
            p.step();
        }
        prop_assert!(p.phase().is_finite(), "phase: {:?}", p.phase());
        prop_assert!(p.lower_bob().is_finite());
    }
}

// =============================================================================
// Momentum derivation
// =============================================================================

proptest! {
    #[test]
    fn momenta_are_deterministic(
        ang0 in -PI..PI,
        ang1 in -PI..PI,
        v0 in -10.0f64..10.0,
        v1 in -10.0f64..10.0,
        l0 in 0.1f64..5.0,
        l1 in 0.1f64..5.0,
        m0 in 0.1f64..10.0,
        m1 in 0.1f64..10.0,
    ) {
        let a = DoublePendulum::new(config(ang0, ang1, v0, v1, l0, l1, m0, m1));
        let b = DoublePendulum::new(config(ang0, ang1, v0, v1, l0, l1, m0, m1));
        prop_assert_eq!(a.upper_moment().to_bits(), b.upper_moment().to_bits());
        prop_assert_eq!(a.lower_moment().to_bits(), b.lower_moment().to_bits());

        let params = Parameters { m0, m1, l0, l1, g: 9.8 };
        let (moment0, moment1) = momenta(&params, &Motion { ang0, ang1, v0, v1 });
        prop_assert_eq!(a.upper_moment().to_bits(), moment0.to_bits());
        prop_assert_eq!(a.lower_moment().to_bits(), moment1.to_bits());
    }
}

// =============================================================================
// Forward/inverse kinematics round-trips
// =============================================================================

proptest! {
    #[test]
    fn upper_bob_round_trip(
        x0 in -100.0f64..100.0,
        y0 in -100.0f64..100.0,
        ang0 in -3.1f64..3.1,
        l0 in 0.1f64..10.0,
    ) {
        let mut p = DoublePendulum::new(PendulumConfig {
            x0,
            y0,
            ang0,
            l0,
            ..PendulumConfig::default()
        });
        let upper = p.upper_bob();
        p.set_upper_bob_pos(upper.x, upper.y);

        prop_assert!((p.upper_length() - l0).abs() < 1e-9, "l0 {} -> {}", l0, p.upper_length());
        prop_assert!((p.upper_angle() - ang0).abs() < 1e-9, "ang0 {} -> {}", ang0, p.upper_angle());
    }

    #[test]
    fn base_round_trip(
        x0 in -100.0f64..100.0,
        y0 in -100.0f64..100.0,
        ang0 in -3.1f64..3.1,
        l0 in 0.1f64..10.0,
        dx in -20.0f64..20.0,
        dy in -20.0f64..20.0,
    ) {
        let mut p = DoublePendulum::new(PendulumConfig {
            x0,
            y0,
            ang0,
            l0,
            ..PendulumConfig::default()
        });
        let upper = p.upper_bob();

        p.set_base_pos(x0, y0);
        prop_assert!((p.upper_length() - l0).abs() < 1e-9);
        prop_assert!((p.upper_angle() - ang0).abs() < 1e-9);

        // Away and back again: the upper bob never moves.
        p.set_base_pos(x0 + dx, y0 + dy);
        let moved = p.upper_bob();
        prop_assert!((moved.x - upper.x).abs() < 1e-9 && (moved.y - upper.y).abs() < 1e-9);
        p.set_base_pos(x0, y0);
        prop_assert!((p.upper_length() - l0).abs() < 1e-9);
        prop_assert!((p.upper_angle() - ang0).abs() < 1e-9);
    }

    #[test]
    fn lower_bob_round_trip(
        ang0 in -3.1f64..3.1,
        ang1 in -3.1f64..3.1,
        l0 in 0.1f64..10.0,
        l1 in 0.1f64..10.0,
    ) {
        let mut p = DoublePendulum::new(PendulumConfig {
            x0: 12.0,
            y0: -7.0,
            ang0,
            ang1,
            l0,
            l1,
            ..PendulumConfig::default()
        });
        let upper = p.upper_bob();
        let lower = p.lower_bob();
        p.set_lower_bob_pos(lower.x, lower.y);

        prop_assert!((p.lower_length() - l1).abs() < 1e-9, "l1 {} -> {}", l1, p.lower_length());
        prop_assert!((p.lower_angle() - ang1).abs() < 1e-9, "ang1 {} -> {}", ang1, p.lower_angle());
        prop_assert_eq!(p.upper_bob(), upper);
    }
}

// =============================================================================
// Scaling round-trips
// =============================================================================

proptest! {
    #[test]
    fn mass_scale_round_trip(
        m0 in 0.01f64..100.0,
        m1 in 0.01f64..100.0,
        factor in 1.001f64..5.0,
    ) {
        let mut p = DoublePendulum::new(PendulumConfig {
            m0,
            m1,
            mass_scale_factor: factor,
            ..PendulumConfig::default()
        });

        p.increase_upper_mass();
        p.decrease_upper_mass();
        p.increase_lower_mass();
        p.decrease_lower_mass();

        prop_assert!((p.upper_mass() - m0).abs() <= m0 * 1e-12);
        prop_assert!((p.lower_mass() - m1).abs() <= m1 * 1e-12);
    }

    #[test]
    fn speed_scale_round_trip(
        dt in 1e-5f64..0.1,
        factor in 1.001f64..5.0,
        nudges in 1usize..10,
    ) {
        let mut p = DoublePendulum::new(PendulumConfig {
            dt,
            speed_scale_factor: factor,
            ..PendulumConfig::default()
        });

        for _ in 0..nudges {
            p.increase_speed();
        }
        prop_assert!(p.dt() > dt);
        for _ in 0..nudges {
            p.decrease_speed();
        }

        prop_assert!((p.dt() - dt).abs() <= dt * 1e-12, "dt {} -> {}", dt, p.dt());
    }
}
