//! Background starfield scattered above the terrain.

use glam::Vec2;
use rand::Rng;

/// A single background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec2,
    /// In `[0.2, 1.0)`.
    pub brightness: f32,
    /// Sprite size in pixels, in `[1.0, 3.0)`.
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Stars span `x` in `[0, width)`.
    pub width: f32,
    /// Lowest `y` a star may have; keeps stars out of the terrain band.
    pub sky_floor: f32,
    /// Stars span `y` in `[sky_floor, height)`.
    pub height: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 300,
            width: 40.0,
            sky_floor: 5.0,
            height: 22.5,
        }
    }
}

/// Scatter `config.count` stars uniformly. Each star draws x, y, brightness,
/// size from `rng` in that order.
pub fn generate_starfield(config: &StarfieldConfig, rng: &mut impl Rng) -> Vec<Star> {
    let stars: Vec<Star> = (0..config.count)
        .map(|_| {
            let x = rng.gen_range(0.0..config.width);
            let y = rng.gen_range(config.sky_floor..config.height);
            let brightness = rng.gen_range(0.2..1.0);
            let size = rng.gen_range(1.0..3.0);
            Star {
                position: Vec2::new(x, y),
                brightness,
                size,
            }
        })
        .collect();
    log::debug!("Generated {} stars", stars.len());
    stars
}
