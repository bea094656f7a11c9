//! Vertex lists for the generated scenery. Built once per session.

use engine_core::{ColorVertex, StarVertex, TerrainVertex};

use crate::starfield::Star;
use crate::terrain::{HeightField, LandingPad};

/// Landing pad accent color.
pub const PAD_COLOR: [f32; 3] = [0.2, 0.8, 0.2];

const PAD_STRIP_HEIGHT: f32 = 0.1;
const PAD_MARKER_HEIGHT: f32 = 0.8;
const PAD_MARKER_HALF_WIDTH: f32 = 0.1;

/// Triangle strip filling the ground: per sample, the surface point then the
/// point directly below it at `y = 0`.
pub fn terrain_strip(field: &HeightField) -> Vec<TerrainVertex> {
    field
        .samples()
        .iter()
        .flat_map(|s| {
            [
                TerrainVertex { position: [s.x, s.y] },
                TerrainVertex { position: [s.x, 0.0] },
            ]
        })
        .collect()
}

/// Top strip plus a marker post at each edge, as a triangle list.
pub fn landing_pad_quads(pad: &LandingPad) -> Vec<ColorVertex> {
    let (left, right, y) = (pad.left(), pad.right(), pad.height);
    let mut verts = Vec::with_capacity(18);
    push_quad(&mut verts, left, y, right, y + PAD_STRIP_HEIGHT, PAD_COLOR);
    for edge in [left, right] {
        push_quad(
            &mut verts,
            edge - PAD_MARKER_HALF_WIDTH,
            y,
            edge + PAD_MARKER_HALF_WIDTH,
            y + PAD_MARKER_HEIGHT,
            PAD_COLOR,
        );
    }
    verts
}

pub fn star_points(stars: &[Star]) -> Vec<StarVertex> {
    stars
        .iter()
        .map(|s| StarVertex {
            position: s.position.to_array(),
            brightness: s.brightness,
            size: s.size,
        })
        .collect()
}

fn push_quad(verts: &mut Vec<ColorVertex>, x0: f32, y0: f32, x1: f32, y1: f32, color: [f32; 3]) {
    for position in [[x0, y0], [x1, y0], [x1, y1], [x0, y0], [x1, y1], [x0, y1]] {
        verts.push(ColorVertex::new(position, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::starfield::{generate_starfield, StarfieldConfig};
    use crate::terrain::TerrainConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn terrain_strip_pairs_surface_with_ground() {
        let field = HeightField::with_pad_center(TerrainConfig::default(), 20.0);
        let strip = terrain_strip(&field);
        assert_eq!(strip.len(), 2 * field.samples().len());
        for (pair, s) in strip.chunks(2).zip(field.samples()) {
            assert_eq!(pair[0].position, [s.x, s.y]);
            assert_eq!(pair[1].position, [s.x, 0.0]);
        }
    }

    #[test]
    fn pad_is_three_quads() {
        let pad = LandingPad {
            center: 20.0,
            width: 3.0,
            height: 2.0,
        };
        let verts = landing_pad_quads(&pad);
        assert_eq!(verts.len(), 18);
        assert!(verts.iter().all(|v| v.color == PAD_COLOR));

        let strip = &verts[0..6];
        assert_eq!(strip[0].position, [18.5, 2.0]);
        assert_eq!(strip[2].position[0], 21.5);
        assert!((strip[2].position[1] - 2.1).abs() < 1e-5);

        let left_marker = &verts[6..12];
        assert!((left_marker[0].position[0] - 18.4).abs() < 1e-5);
        assert!((left_marker[2].position[1] - 2.8).abs() < 1e-5);

        let right_marker = &verts[12..18];
        assert!((right_marker[1].position[0] - 21.6).abs() < 1e-5);
    }

    #[test]
    fn star_points_mirror_stars() {
        let stars = generate_starfield(&StarfieldConfig::default(), &mut StdRng::seed_from_u64(3));
        let points = star_points(&stars);
        assert_eq!(points.len(), stars.len());
        assert_eq!(points[10].position, stars[10].position.to_array());
        assert_eq!(points[10].brightness, stars[10].brightness);
        assert_eq!(points[10].size, stars[10].size);
    }
}
