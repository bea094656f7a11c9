//! Luna lander game: configuration, the session that drives a play-through,
//! and the authored ship mesh.

pub mod authored_lander_mesh;
pub mod config;
pub mod session;

pub use config::GameConfig;
pub use session::{SceneGeometry, Session};
