//! Lander physics: integration, ground contact, and touchdown classification.

pub mod contact;
pub mod lander;
pub mod touchdown;

pub use contact::*;
pub use lander::*;
pub use touchdown::*;
