//! One play session: generated world, lander state, and per-frame orchestration.
//!
//! The session owns all simulation state. The window layer feeds it elapsed
//! time and polled [`Actions`]; the renderer only sees [`SceneGeometry`] once
//! and a [`FrameParams`] snapshot per frame.

use engine_core::{ColorVertex, StarVertex, TerrainVertex, Transform, Vec4};
use input::Actions;
use physics::{Controls, FlightMode, LanderParams, LanderState, Outcome, Touchdown};
use procgen::{
    generate_starfield, landing_pad_quads, star_points, terrain_strip, HeightField,
    StarfieldConfig, TerrainConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::{Camera2D, DrawParams, FrameParams};

use crate::authored_lander_mesh::build_lander;
use crate::config::GameConfig;

/// Longest step the physics ever sees; longer frames are slowed down.
pub const MAX_FRAME_DT: f32 = 0.05;

pub const STAR_TINT: Vec4 = Vec4::ONE;
pub const TERRAIN_TINT: Vec4 = Vec4::new(0.45, 0.42, 0.40, 1.0);
pub const PAD_TINT: Vec4 = Vec4::ONE;
pub const FLYING_TINT: Vec4 = Vec4::ONE;
pub const LANDED_TINT: Vec4 = Vec4::new(0.3, 1.0, 0.3, 1.0);
pub const CRASHED_TINT: Vec4 = Vec4::new(1.0, 0.3, 0.3, 1.0);

/// Static vertex lists, built once per session.
#[derive(Debug, Clone)]
pub struct SceneGeometry {
    pub stars: Vec<StarVertex>,
    pub terrain: Vec<TerrainVertex>,
    pub pad: Vec<ColorVertex>,
    pub lander: Vec<ColorVertex>,
}

pub struct Session {
    params: LanderParams,
    terrain: HeightField,
    geometry: SceneGeometry,
    lander: LanderState,
    reset_held: bool,
}

impl Session {
    /// Generate the world from `config.seed`. Terrain draws from the RNG
    /// first, then the starfield.
    pub fn new(config: &GameConfig) -> Self {
        let params = LanderParams::default();
        let mut rng = StdRng::seed_from_u64(config.seed);

        let terrain = HeightField::generate(
            TerrainConfig {
                world_width: params.world_width,
                ..Default::default()
            },
            &mut rng,
        );
        let stars = generate_starfield(
            &StarfieldConfig {
                count: config.star_count,
                width: params.world_width,
                height: params.world_height,
                ..Default::default()
            },
            &mut rng,
        );

        log::info!(
            "World seed {}: landing pad at x = {:.2} ({} stars)",
            config.seed,
            terrain.pad().center,
            stars.len()
        );

        let geometry = SceneGeometry {
            stars: star_points(&stars),
            terrain: terrain_strip(&terrain),
            pad: landing_pad_quads(terrain.pad()),
            lander: build_lander(),
        };

        Self {
            lander: LanderState::initial(&params),
            params,
            terrain,
            geometry,
            reset_held: false,
        }
    }

    /// Advance one frame. `raw_dt` is clamped to `[0, MAX_FRAME_DT]`.
    ///
    /// A held reset pins the lander to its start pose every frame but is
    /// only logged on the frame it is first seen.
    pub fn tick(&mut self, raw_dt: f32, actions: &Actions) -> Option<Touchdown> {
        if actions.reset && self.reset_held {
            self.lander = LanderState::initial(&self.params);
        } else if actions.reset {
            self.reset();
        }
        self.reset_held = actions.reset;

        let dt = raw_dt.clamp(0.0, MAX_FRAME_DT);
        let controls = Controls {
            thrust: actions.thrust,
            rotate_left: actions.rotate_left,
            rotate_right: actions.rotate_right,
        };

        let touchdown = self.lander.step(dt, controls, &self.params, &self.terrain)?;
        match touchdown.outcome {
            Outcome::Landed => log::info!("{touchdown}"),
            Outcome::Crashed(_) => {
                log::warn!("{touchdown}");
                log::info!("Press R to retry.");
            }
        }
        Some(touchdown)
    }

    /// Put the lander back at its initial pose. The world is kept.
    pub fn reset(&mut self) {
        log::info!("Lander reset");
        self.lander = LanderState::initial(&self.params);
    }

    /// Draw parameters for the current state.
    pub fn frame(&self, aspect: f32) -> FrameParams {
        let camera = Camera2D::new(self.params.world_width, aspect);
        let model = Transform::planar(self.lander.position, -self.lander.angle).to_matrix();

        FrameParams {
            projection: camera.projection(),
            stars: DrawParams::tinted(STAR_TINT),
            terrain: DrawParams::tinted(TERRAIN_TINT),
            pad: DrawParams::tinted(PAD_TINT),
            lander: DrawParams {
                model,
                tint: mode_tint(self.lander.mode),
            },
        }
    }

    /// One-line status for the window title.
    pub fn telemetry(&self) -> String {
        let l = &self.lander;
        let ground = self.terrain.height_at(l.position.x);
        let altitude = l.position.y - self.params.half_height - ground;
        let mode = match l.mode {
            FlightMode::Flying => "Flying",
            FlightMode::Landed => "Landed",
            FlightMode::Crashed => "Crashed",
        };
        format!(
            "Luna Lander | {} | alt {:.1} m | speed {:.2} m/s | fuel {:.0}",
            mode,
            altitude.max(0.0),
            l.velocity.length(),
            l.fuel
        )
    }

    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    pub fn lander(&self) -> &LanderState {
        &self.lander
    }

    pub fn terrain(&self) -> &HeightField {
        &self.terrain
    }

    pub fn params(&self) -> &LanderParams {
        &self.params
    }
}

pub fn mode_tint(mode: FlightMode) -> Vec4 {
    match mode {
        FlightMode::Flying => FLYING_TINT,
        FlightMode::Landed => LANDED_TINT,
        FlightMode::Crashed => CRASHED_TINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{Vec2, Vec3};

    fn session() -> Session {
        Session::new(&GameConfig::default())
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut s = session();
        s.tick(1.0, &Actions::default());
        let g = s.params().gravity;
        assert!((s.lander().velocity.y + g * MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn negative_dt_is_a_no_op_step() {
        let mut s = session();
        s.tick(-0.5, &Actions::default());
        assert_eq!(s.lander().velocity, Vec2::ZERO);
    }

    #[test]
    fn actions_map_to_controls() {
        let mut s = session();
        let actions = Actions {
            thrust: true,
            rotate_right: true,
            ..Default::default()
        };
        s.tick(0.02, &actions);
        assert!(s.lander().thrusting);
        assert!(s.lander().angle > 0.0);
        assert!(s.lander().fuel < s.params().initial_fuel);
    }

    #[test]
    fn reset_restores_initial_pose() {
        let mut s = session();
        for _ in 0..10 {
            let actions = Actions {
                thrust: true,
                rotate_left: true,
                ..Default::default()
            };
            s.tick(0.05, &actions);
        }
        assert_ne!(*s.lander(), LanderState::initial(s.params()));
        let reset = Actions {
            reset: true,
            ..Default::default()
        };
        s.tick(0.0, &reset);
        assert_eq!(*s.lander(), LanderState::initial(s.params()));
    }

    #[test]
    fn held_reset_keeps_lander_pinned() {
        let mut s = session();
        let reset = Actions {
            reset: true,
            thrust: true,
            ..Default::default()
        };
        for _ in 0..30 {
            s.tick(1.0 / 60.0, &reset);
            assert!(s.reset_held);
            let start = LanderState::initial(s.params()).position;
            assert!((s.lander().position - start).length() < 0.01);
        }
        s.tick(1.0 / 60.0, &Actions::default());
        assert!(!s.reset_held);
    }

    #[test]
    fn frame_places_ship_and_projects_world() {
        let s = session();
        let frame = s.frame(16.0 / 9.0);
        let origin = frame.lander.model.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(20.0, 11.25, 0.0)).length() < 1e-5);
        let clip = frame.projection.project_point3(origin);
        assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
        assert_eq!(frame.stars.tint, STAR_TINT);
        assert_eq!(frame.terrain.tint, TERRAIN_TINT);
        assert_eq!(frame.pad.tint, PAD_TINT);
        assert_eq!(frame.lander.tint, FLYING_TINT);
    }

    #[test]
    fn ship_rotation_mirrors_angle() {
        let mut s = session();
        let actions = Actions {
            rotate_right: true,
            ..Default::default()
        };
        s.tick(0.05, &actions);
        let frame = s.frame(1.0);
        // Positive angle tilts the nose toward +X.
        let up = frame.lander.model.transform_vector3(Vec3::Y);
        assert!(up.x > 0.0);
    }

    #[test]
    fn tints_follow_mode() {
        assert_eq!(mode_tint(FlightMode::Flying), FLYING_TINT);
        assert_eq!(mode_tint(FlightMode::Landed), LANDED_TINT);
        assert_eq!(mode_tint(FlightMode::Crashed), CRASHED_TINT);
    }

    #[test]
    fn geometry_counts() {
        let s = session();
        let g = s.geometry();
        assert_eq!(g.stars.len(), 300);
        assert_eq!(g.terrain.len(), 2 * 201);
        assert_eq!(g.pad.len(), 18);
        assert_eq!(g.lander.len(), 51);
    }

    #[test]
    fn telemetry_reports_state() {
        let s = session();
        let line = s.telemetry();
        assert!(line.contains("Flying"), "{line}");
        assert!(line.contains("fuel 100"), "{line}");
    }
}
