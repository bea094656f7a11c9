//! Touchdown reports produced when the lander meets the ground.

use std::fmt;

/// Why a touchdown counted as a crash. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashReason {
    OffPad,
    TooFast,
    BadAngle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Landed,
    Crashed(CrashReason),
}

/// Snapshot taken at the moment of contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touchdown {
    pub outcome: Outcome,
    /// Speed (m/s) just before velocity was zeroed.
    pub speed: f32,
    /// Normalised tilt in radians, `[0, π]`.
    pub tilt: f32,
    pub fuel: f32,
}

impl Touchdown {
    pub fn is_landing(&self) -> bool {
        self.outcome == Outcome::Landed
    }
}

impl fmt::Display for Touchdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.tilt.to_degrees();
        match self.outcome {
            Outcome::Landed => write!(
                f,
                "SUCCESSFUL LANDING! speed {:.2} m/s | angle {:.1} deg | fuel {:.1}",
                self.speed, degrees, self.fuel
            ),
            Outcome::Crashed(CrashReason::OffPad) => write!(f, "CRASH: missed the landing pad!"),
            Outcome::Crashed(CrashReason::TooFast) => {
                write!(f, "CRASH: too fast! ({:.2} m/s)", self.speed)
            }
            Outcome::Crashed(CrashReason::BadAngle) => {
                write!(f, "CRASH: bad angle! ({:.1} deg)", degrees)
            }
        }
    }
}
