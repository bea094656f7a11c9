//! Hand-authored lunar module silhouette.
//!
//! Points are in ship space (origin at the hull center, +Y up) and scaled by
//! [`LANDER_SCALE`] when the vertex list is built. Feet sit at `y = -1.05`
//! before scaling, which puts them roughly one half height below the origin.

use engine_core::ColorVertex;

pub const LANDER_SCALE: f32 = 0.5;

const GOLD: [f32; 3] = [0.85, 0.75, 0.3];
const SILVER: [f32; 3] = [0.7, 0.72, 0.75];
const DARK: [f32; 3] = [0.3, 0.3, 0.35];
const RED: [f32; 3] = [0.9, 0.2, 0.1];

/// Descent stage outline, fanned from the first point.
const HULL: [[f32; 2]; 8] = [
    [-0.6, 0.0],
    [-0.5, 0.4],
    [-0.2, 0.6],
    [0.2, 0.6],
    [0.5, 0.4],
    [0.6, 0.0],
    [0.5, -0.3],
    [-0.5, -0.3],
];

type Tri = [[f32; 2]; 3];

/// Remaining parts, drawn after the hull in this order.
const PARTS: [(Tri, [f32; 3]); 11] = [
    // Ascent stage
    ([[-0.3, 0.6], [-0.25, 1.0], [0.25, 1.0]], SILVER),
    ([[-0.3, 0.6], [0.25, 1.0], [0.3, 0.6]], SILVER),
    // Window
    ([[-0.06, 0.375], [0.0, 0.45], [0.06, 0.375]], DARK),
    // Left leg, left foot
    ([[-0.5, -0.3], [-0.9, -1.0], [-0.7, -1.0]], DARK),
    ([[-0.9, -1.0], [-1.1, -1.05], [-0.7, -1.05]], DARK),
    // Right leg, right foot
    ([[0.5, -0.3], [0.7, -1.0], [0.9, -1.0]], DARK),
    ([[0.7, -1.05], [0.9, -1.0], [1.1, -1.05]], DARK),
    // Nozzle
    ([[-0.15, -0.3], [-0.2, -0.5], [0.2, -0.5]], DARK),
    ([[-0.15, -0.3], [0.2, -0.5], [0.15, -0.3]], DARK),
    // Marking stripe
    ([[-0.4, 0.15], [-0.4, 0.25], [0.4, 0.25]], RED),
    ([[-0.4, 0.15], [0.4, 0.25], [0.4, 0.15]], RED),
];

/// Build the lander as a triangle list in scaled ship space.
pub fn build_lander() -> Vec<ColorVertex> {
    let hull = (1..HULL.len() - 1).map(|i| ([HULL[0], HULL[i], HULL[i + 1]], GOLD));

    hull.chain(PARTS.iter().copied())
        .flat_map(|(tri, color)| {
            tri.map(|[x, y]| ColorVertex::new([x * LANDER_SCALE, y * LANDER_SCALE], color))
        })
        .collect()
}
