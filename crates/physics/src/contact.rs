//! Ground contact: what the lander collides with and how a touchdown is judged.

use procgen::HeightField;

use crate::lander::LanderParams;
use crate::touchdown::{CrashReason, Outcome};

/// Anything the lander can touch down on.
pub trait Ground {
    /// Surface height at `x`.
    fn height_at(&self, x: f32) -> f32;
    /// Whether `x` lies on the landing pad.
    fn on_pad(&self, x: f32) -> bool;
}

impl Ground for HeightField {
    fn height_at(&self, x: f32) -> f32 {
        HeightField::height_at(self, x)
    }

    fn on_pad(&self, x: f32) -> bool {
        self.pad().contains(x)
    }
}

/// Judge a touchdown. A miss of the pad outranks speed, speed outranks angle.
pub fn classify(speed: f32, tilt: f32, on_pad: bool, params: &LanderParams) -> Outcome {
    if speed < params.safe_landing_velocity && tilt < params.safe_landing_angle && on_pad {
        Outcome::Landed
    } else if !on_pad {
        Outcome::Crashed(CrashReason::OffPad)
    } else if speed >= params.safe_landing_velocity {
        Outcome::Crashed(CrashReason::TooFast)
    } else {
        Outcome::Crashed(CrashReason::BadAngle)
    }
}
