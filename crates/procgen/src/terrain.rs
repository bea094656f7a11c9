//! Height-field terrain with a single flat landing pad.
//!
//! **Seed-based determinism:** the only random input is the pad center, drawn
//! from the caller's RNG. The hills themselves are a fixed sum of sines, so the
//! same seed always produces the same samples.

use glam::Vec2;
use rand::Rng;

/// Layered sine terms `(amplitude, frequency, phase)`: broad hills, medium
/// bumps, small ridges, fine texture.
const HILLS: [(f32, f32, f32); 4] = [
    (1.5, 0.3, 0.0),
    (0.8, 0.7, 1.0),
    (0.4, 1.5, 2.0),
    (0.2, 3.0, 0.5),
];

/// Configuration for terrain generation.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainConfig {
    /// Width of the world in world units.
    pub world_width: f32,
    /// Number of segments; the field has `segments + 1` samples.
    pub segments: usize,
    /// Width of the landing pad.
    pub pad_width: f32,
    /// Height of the pad and the baseline the hills oscillate around.
    pub flat_height: f32,
    /// Hills never dip below this before edge easing.
    pub min_height: f32,
    /// The pad center is kept at least this far from either world edge.
    pub pad_margin: f32,
    /// Distance from a pad edge over which the hills ease down to the pad.
    pub transition: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            world_width: 40.0,
            segments: 200,
            pad_width: 3.0,
            flat_height: 2.0,
            min_height: 0.5,
            pad_margin: 8.0,
            transition: 2.0,
        }
    }
}

/// The flat landing zone `[left, right]` at `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingPad {
    pub center: f32,
    pub width: f32,
    pub height: f32,
}

impl LandingPad {
    pub fn left(&self) -> f32 {
        self.center - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center + self.width / 2.0
    }

    /// Inclusive on both edges.
    pub fn contains(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }
}

/// Evenly spaced `(x, height)` samples across the world width.
#[derive(Debug, Clone)]
pub struct HeightField {
    pad: LandingPad,
    spacing: f32,
    samples: Vec<Vec2>,
}

impl HeightField {
    /// Pick a pad center uniformly in `[margin, width - margin)` and build the field.
    pub fn generate(config: TerrainConfig, rng: &mut impl Rng) -> Self {
        let lo = config.pad_margin;
        let hi = config.world_width - config.pad_margin;
        let center = if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            config.world_width / 2.0
        };
        Self::with_pad_center(config, center)
    }

    /// Build the field around a pad centered at `pad_center`.
    pub fn with_pad_center(config: TerrainConfig, pad_center: f32) -> Self {
        let segments = config.segments.max(1);
        let spacing = config.world_width / segments as f32;
        let pad = LandingPad {
            center: pad_center,
            width: config.pad_width,
            height: config.flat_height,
        };

        let samples = (0..=segments)
            .map(|i| {
                let x = i as f32 * spacing;
                Vec2::new(x, sample_height(&config, &pad, x))
            })
            .collect();

        log::debug!(
            "Generated height field: {} samples, pad [{:.2}, {:.2}]",
            segments + 1,
            pad.left(),
            pad.right()
        );

        Self {
            pad,
            spacing,
            samples,
        }
    }

    /// Ground height at `x`, linearly interpolated between the neighbouring
    /// samples. Out-of-range `x` clamps to the first or last segment. The pad
    /// is exactly flat across its whole width, including the partial segments
    /// at its edges.
    pub fn height_at(&self, x: f32) -> f32 {
        if self.pad.contains(x) {
            return self.pad.height;
        }
        let last = self.samples.len().saturating_sub(2);
        let idx = ((x / self.spacing).floor().max(0.0) as usize).min(last);
        let a = self.samples[idx];
        let b = self.samples[idx + 1];
        let t = ((x - a.x) / self.spacing).clamp(0.0, 1.0);
        a.y + (b.y - a.y) * t
    }

    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn pad(&self) -> &LandingPad {
        &self.pad
    }
}

fn sample_height(config: &TerrainConfig, pad: &LandingPad, x: f32) -> f32 {
    if pad.contains(x) {
        return config.flat_height;
    }

    let hills: f32 = HILLS
        .iter()
        .map(|&(amp, freq, phase)| amp * (x * freq + phase).sin())
        .sum();
    let height = (config.flat_height + hills).max(config.min_height);

    // Quadratic ease into the pad height near its edges.
    let dist = (x - pad.left()).abs().min((x - pad.right()).abs());
    if dist < config.transition {
        let t = dist / config.transition;
        config.flat_height + (height - config.flat_height) * t * t
    } else {
        height
    }
}
