//! Lander state machine: Flying until the first touchdown, then Landed or
//! Crashed until reset.

use std::f32::consts::{PI, TAU};

use engine_core::Vec2;

use crate::contact::{classify, Ground};
use crate::touchdown::{Outcome, Touchdown};

/// World and ship constants. Fixed at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct LanderParams {
    pub world_width: f32,
    pub world_height: f32,
    /// m/s²
    pub gravity: f32,
    /// m/s² while the engine burns.
    pub thrust_power: f32,
    /// rad/s
    pub rotation_speed: f32,
    pub initial_fuel: f32,
    /// Fuel units per second of burn.
    pub fuel_burn_rate: f32,
    pub safe_landing_velocity: f32,
    /// Radians.
    pub safe_landing_angle: f32,
    /// Distance from the ship's origin to its feet.
    pub half_height: f32,
}

impl Default for LanderParams {
    fn default() -> Self {
        Self {
            world_width: 40.0,
            world_height: 22.5,
            gravity: 1.62,
            thrust_power: 4.0,
            rotation_speed: 2.5,
            initial_fuel: 100.0,
            fuel_burn_rate: 8.0,
            safe_landing_velocity: 2.0,
            safe_landing_angle: 0.26,
            half_height: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightMode {
    #[default]
    Flying,
    Landed,
    Crashed,
}

impl FlightMode {
    pub fn is_terminal(self) -> bool {
        self != FlightMode::Flying
    }
}

/// Control inputs for one physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanderState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians, 0 = upright. Rotating right increases it.
    pub angle: f32,
    pub fuel: f32,
    /// Whether the engine burned during the last step.
    pub thrusting: bool,
    pub mode: FlightMode,
}

impl LanderState {
    /// Centered in the world, at rest, upright, full tank.
    pub fn initial(params: &LanderParams) -> Self {
        Self {
            position: Vec2::new(params.world_width / 2.0, params.world_height / 2.0),
            velocity: Vec2::ZERO,
            angle: 0.0,
            fuel: params.initial_fuel,
            thrusting: false,
            mode: FlightMode::Flying,
        }
    }

    pub fn reset(&mut self, params: &LanderParams) {
        *self = Self::initial(params);
    }

    /// Advance the simulation by `dt` seconds. Returns a report on the step
    /// that touches the ground; terminal states ignore further steps.
    pub fn step(
        &mut self,
        dt: f32,
        controls: Controls,
        params: &LanderParams,
        ground: &impl Ground,
    ) -> Option<Touchdown> {
        if self.mode.is_terminal() {
            return None;
        }

        let turn = controls.rotate_right as i32 - controls.rotate_left as i32;
        self.angle += params.rotation_speed * dt * turn as f32;

        self.velocity.y -= params.gravity * dt;

        self.thrusting = controls.thrust && self.fuel > 0.0;
        if self.thrusting {
            let dir = Vec2::new(-self.angle.sin(), self.angle.cos());
            self.velocity += dir * params.thrust_power * dt;
            self.fuel = (self.fuel - params.fuel_burn_rate * dt).max(0.0);
        }

        self.position += self.velocity * dt;

        if self.position.x < 0.0 || self.position.x > params.world_width {
            self.position.x = self.position.x.rem_euclid(params.world_width);
        }

        let terrain = ground.height_at(self.position.x);
        if self.position.y - params.half_height > terrain {
            return None;
        }

        self.position.y = terrain + params.half_height;
        let speed = self.velocity.length();
        let tilt = normalized_tilt(self.angle);
        let outcome = classify(speed, tilt, ground.on_pad(self.position.x), params);

        self.mode = match outcome {
            Outcome::Landed => FlightMode::Landed,
            Outcome::Crashed(_) => FlightMode::Crashed,
        };
        self.velocity = Vec2::ZERO;
        log::debug!(
            "Touchdown at x = {:.2}: {:?} (speed {:.2}, tilt {:.3})",
            self.position.x,
            outcome,
            speed,
            tilt
        );

        Some(Touchdown {
            outcome,
            speed,
            tilt,
            fuel: self.fuel,
        })
    }
}

/// Fold any angle into its absolute deviation from upright, in `[0, π]`.
pub fn normalized_tilt(angle: f32) -> f32 {
    let a = (angle % TAU).abs();
    if a > PI {
        TAU - a
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::touchdown::CrashReason;
    use procgen::{HeightField, TerrainConfig};

    /// Flat ground at `height` with a pad spanning `[left, right]`.
    struct Flat {
        height: f32,
        left: f32,
        right: f32,
    }

    impl Ground for Flat {
        fn height_at(&self, _x: f32) -> f32 {
            self.height
        }

        fn on_pad(&self, x: f32) -> bool {
            x >= self.left && x <= self.right
        }
    }

    const FLAT: Flat = Flat {
        height: 2.0,
        left: 18.5,
        right: 21.5,
    };

    fn hovering(params: &LanderParams) -> LanderState {
        let mut s = LanderState::initial(params);
        s.position.y = 15.0;
        s
    }

    #[test]
    fn free_fall_accumulates_gravity() {
        let params = LanderParams::default();
        let mut s = LanderState::initial(&params);
        let low = Flat {
            height: -1.0e6,
            ..FLAT
        };
        for n in 1..=5 {
            assert!(s.step(1.0, Controls::default(), &params, &low).is_none());
            assert!((s.velocity.y + params.gravity * n as f32).abs() < 1e-4);
        }
        assert_eq!(s.velocity.x, 0.0);
        assert_eq!(s.fuel, params.initial_fuel);
    }

    #[test]
    fn slow_upright_on_pad_lands() {
        let params = LanderParams::default();
        let mut s = LanderState::initial(&params);
        s.position = Vec2::new(20.0, 2.5);
        s.velocity = Vec2::new(0.0, -0.5);
        let report = s.step(0.016, Controls::default(), &params, &FLAT).expect("touchdown");
        assert_eq!(report.outcome, Outcome::Landed);
        assert_eq!(s.mode, FlightMode::Landed);
        assert_eq!(s.velocity, Vec2::ZERO);
        assert!((s.position.y - 2.5).abs() < 1e-6);
    }

    #[test]
    fn off_pad_crashes() {
        let params = LanderParams::default();
        let mut s = LanderState::initial(&params);
        s.position = Vec2::new(FLAT.right + 10.0, 2.5);
        s.velocity = Vec2::new(0.0, -0.5);
        let report = s.step(0.016, Controls::default(), &params, &FLAT).expect("touchdown");
        assert_eq!(report.outcome, Outcome::Crashed(CrashReason::OffPad));
        assert_eq!(s.mode, FlightMode::Crashed);
        assert_eq!(s.velocity, Vec2::ZERO);
    }

    #[test]
    fn fast_on_pad_crashes() {
        let params = LanderParams::default();
        let mut s = LanderState::initial(&params);
        s.position = Vec2::new(20.0, 2.6);
        s.velocity = Vec2::new(0.0, -10.0);
        let report = s.step(0.016, Controls::default(), &params, &FLAT).expect("touchdown");
        assert_eq!(report.outcome, Outcome::Crashed(CrashReason::TooFast));
        assert!(report.speed >= params.safe_landing_velocity);
    }

    #[test]
    fn tilted_on_pad_crashes() {
        let params = LanderParams::default();
        let mut s = LanderState::initial(&params);
        s.position = Vec2::new(20.0, 2.5);
        s.velocity = Vec2::new(0.0, -0.5);
        s.angle = 0.5;
        let report = s.step(0.016, Controls::default(), &params, &FLAT).expect("touchdown");
        assert_eq!(report.outcome, Outcome::Crashed(CrashReason::BadAngle));
    }

    #[test]
    fn lands_on_generated_pad() {
        let params = LanderParams::default();
        let field = HeightField::with_pad_center(TerrainConfig::default(), 20.0);
        let mut s = LanderState::initial(&params);
        s.position = Vec2::new(20.0, 2.52);
        s.velocity = Vec2::new(0.0, -1.0);
        let report = s.step(0.05, Controls::default(), &params, &field).expect("touchdown");
        assert!(report.is_landing());

        let mut s = LanderState::initial(&params);
        s.position = Vec2::new(30.0, field.height_at(30.0) + 0.52);
        s.velocity = Vec2::new(0.0, -1.0);
        let report = s.step(0.05, Controls::default(), &params, &field).expect("touchdown");
        assert_eq!(report.outcome, Outcome::Crashed(CrashReason::OffPad));
    }

    #[test]
    fn x_wraps_across_world_edges() {
        let params = LanderParams::default();
        let mut s = hovering(&params);
        s.position.x = params.world_width + 0.1;
        s.step(0.0, Controls::default(), &params, &FLAT);
        assert!((s.position.x - 0.1).abs() < 1e-4);

        let mut s = hovering(&params);
        s.position.x = 0.5;
        s.velocity.x = -1.0;
        s.step(1.0, Controls::default(), &params, &FLAT);
        assert!((s.position.x - (params.world_width - 0.5)).abs() < 1e-4);
    }

    #[test]
    fn thrust_follows_heading_and_burns_fuel() {
        let params = LanderParams::default();
        let mut s = hovering(&params);
        s.angle = std::f32::consts::FRAC_PI_2;
        let controls = Controls {
            thrust: true,
            ..Default::default()
        };
        s.step(0.1, controls, &params, &FLAT);
        assert!(s.thrusting);
        assert!((s.velocity.x + params.thrust_power * 0.1).abs() < 1e-5);
        assert!((s.velocity.y + params.gravity * 0.1).abs() < 1e-5);
        assert!((s.fuel - (params.initial_fuel - 0.8)).abs() < 1e-4);
    }

    #[test]
    fn fuel_never_goes_negative() {
        let params = LanderParams::default();
        let mut s = hovering(&params);
        s.fuel = 0.1;
        let controls = Controls {
            thrust: true,
            ..Default::default()
        };
        s.step(0.1, controls, &params, &FLAT);
        assert_eq!(s.fuel, 0.0);
        s.step(0.1, controls, &params, &FLAT);
        assert!(!s.thrusting);
        assert_eq!(s.fuel, 0.0);
    }

    #[test]
    fn rotation_inputs_cancel() {
        let params = LanderParams::default();
        let mut s = hovering(&params);
        let both = Controls {
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        };
        s.step(0.1, both, &params, &FLAT);
        assert_eq!(s.angle, 0.0);

        let right = Controls {
            rotate_right: true,
            ..Default::default()
        };
        s.step(0.1, right, &params, &FLAT);
        assert!((s.angle - 0.25).abs() < 1e-6);

        let left = Controls {
            rotate_left: true,
            ..Default::default()
        };
        s.step(0.2, left, &params, &FLAT);
        assert!((s.angle + 0.25).abs() < 1e-6);
    }

    #[test]
    fn terminal_state_ignores_steps_until_reset() {
        let params = LanderParams::default();
        let mut s = LanderState::initial(&params);
        s.position = Vec2::new(30.0, 2.5);
        assert!(s.step(0.016, Controls::default(), &params, &FLAT).is_some());
        let frozen = s.clone();
        let thrust = Controls {
            thrust: true,
            ..Default::default()
        };
        assert!(s.step(0.5, thrust, &params, &FLAT).is_none());
        assert_eq!(s, frozen);

        s.reset(&params);
        assert_eq!(s, LanderState::initial(&params));
        assert_eq!(s.mode, FlightMode::Flying);
        assert_eq!(s.position, Vec2::new(20.0, 11.25));
    }

    #[test]
    fn tilt_folds_multiple_turns() {
        assert!(normalized_tilt(0.0).abs() < 1e-6);
        assert!((normalized_tilt(0.2) - 0.2).abs() < 1e-6);
        assert!((normalized_tilt(-0.2) - 0.2).abs() < 1e-6);
        assert!((normalized_tilt(TAU - 0.1) - 0.1).abs() < 1e-5);
        assert!((normalized_tilt(3.0 * TAU + 0.1) - 0.1).abs() < 1e-4);
        assert!((normalized_tilt(-TAU - 0.1) - 0.1).abs() < 1e-5);
        assert!((normalized_tilt(PI) - PI).abs() < 1e-6);
    }
}
