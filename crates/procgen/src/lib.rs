//! Procedural generation for the lander scenery: terrain, landing pad, stars,
//! and the static vertex lists built from them.

pub mod geometry;
pub mod starfield;
pub mod terrain;

pub use geometry::*;
pub use starfield::*;
pub use terrain::*;
